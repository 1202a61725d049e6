/* ************************************************************************ **
** This file is part of specnorm, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::fmt;
use std::time::Instant;

/// Installs the global logger. May only be called once per process.
///
/// Log records go to stderr so that stdout carries nothing but the result.
pub(crate) fn init_global_logger(verbose: bool) -> FailResult<()> {
    let base_level = match verbose {
        true => ::log::LevelFilter::Trace,
        false => ::log::LevelFilter::Info,
    };

    let start = Instant::now();
    ::fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(base_level)
        .level_for("specnorm_kernel", base_level)
        .chain(::std::io::stderr())
        .apply()?;
    Ok(())
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub ::log::Level);

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            ::log::Level::Error => ::ansi_term::Colour::Red.bold(),
            ::log::Level::Warn => ::ansi_term::Colour::Red.normal(),
            ::log::Level::Info => ::ansi_term::Colour::Cyan.bold(),
            ::log::Level::Debug => ::ansi_term::Colour::Yellow.dimmed(),
            ::log::Level::Trace => ::ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
