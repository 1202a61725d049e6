/* ************************************************************************ **
** This file is part of specnorm, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The harness around the kernel: argument parsing, logging, and
//! result printing. Nothing in here touches the numerics.

#[macro_use] extern crate log;
extern crate fern;
extern crate ansi_term;
extern crate clap;
extern crate failure;
extern crate specnorm_kernel;

pub type FailResult<T> = Result<T, ::failure::Error>;

pub mod entry_points;
mod logging;
