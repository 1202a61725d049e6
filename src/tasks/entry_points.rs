/* ************************************************************************ **
** This file is part of specnorm, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::logging::init_global_logger;

use std::convert::TryFrom;
use std::ffi::OsStr;

use ::specnorm_kernel::{InvalidSize, Threading, DEFAULT_N};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.causes() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

#[derive(Debug)]
struct CliArgs {
    n: usize,
    threading: Threading,
}

fn resolve_args(m: &::clap::ArgMatches<'_>) -> FailResult<CliArgs> {
    let n = match m.value_of("n") {
        None => DEFAULT_N,
        Some(s) => {
            let n: i64 = s.parse()?;
            // rejected here, before any computation begins
            if n <= 0 {
                return Err(InvalidSize(n).into());
            }
            // fails rather than wraps for sizes beyond the pointer width
            usize::try_from(n)?
        },
    };
    Ok(CliArgs {
        n,
        threading: match m.is_present("serial") {
            true => Threading::Serial,
            false => Threading::Rayon,
        },
    })
}

fn make_app<'a, 'b>() -> ::clap::App<'a, 'b> {
    ::clap::App::new("specnorm")
        .about("\
            Approximates the spectral norm of an implicitly-defined matrix \
            by power iteration on its normal-equations form.\
        ")
        .args(&[
            ::clap::Arg::with_name("n")
                .short("n").long("size")
                .takes_value(true).value_name("N").number_of_values(1)
                .allow_hyphen_values(true)
                .help("matrix dimension [default: 130]"),
            ::clap::Arg::with_name("serial")
                .long("serial")
                .help("run the multiplications on a single thread"),
            ::clap::Arg::with_name("verbose")
                .short("v").long("verbose")
                .help("enable trace-level log output"),
        ])
}

// %% CRATES: binary: specnorm %%
pub fn specnorm() {
    wrap_result_main(|| {
        let matches = make_app().get_matches();

        // logger comes up first so that argument errors are visible
        init_global_logger(matches.is_present("verbose"))?;
        let args = resolve_args(&matches)?;

        info!("computing spectral norm for n = {} ({:?})", args.n, args.threading);
        let answer = ::specnorm_kernel::compute_spectral_norm(args.n, args.threading)?;
        println!("{:.9}", answer);
        Ok(())
    });
}

//--------------------------------------------------

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn resolve(argv: &[&str]) -> FailResult<CliArgs> {
        let matches = make_app().get_matches_from_safe(argv)?;
        resolve_args(&matches)
    }

    #[test]
    fn negative_size_is_rejected_before_any_work() {
        let err = resolve(&["specnorm", "--size=-5"]).unwrap_err();
        assert!(err.downcast_ref::<InvalidSize>().is_some(), "{}", err);
        assert!(err.to_string().contains("-5"), "{}", err);
    }

    #[test]
    fn zero_size_is_rejected_before_any_work() {
        let err = resolve(&["specnorm", "--size=0"]).unwrap_err();
        assert!(err.downcast_ref::<InvalidSize>().is_some(), "{}", err);
    }

    #[test]
    fn unparseable_size_is_an_error() {
        assert!(resolve(&["specnorm", "--size=banana"]).is_err());
    }

    #[test]
    fn defaults() {
        let args = resolve(&["specnorm"]).unwrap();
        assert_eq!(args.n, DEFAULT_N);
        assert_eq!(args.threading, Threading::Rayon);
    }

    #[test]
    fn explicit_flags() {
        let args = resolve(&["specnorm", "-n", "42", "--serial"]).unwrap();
        assert_eq!(args.n, 42);
        assert_eq!(args.threading, Threading::Serial);
    }
}
