// firmtone -- audio and pattern generators for embedded firmware
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Pieces shared by the command line tools.

/// Log level for the number of `-v` flags given on the command line.
///
/// # Examples
///
/// ```
/// # use firmtone::cli::verbosity;
/// assert_eq!(verbosity(0), log::Level::Info);
/// assert_eq!(verbosity(1), log::Level::Debug);
/// assert_eq!(verbosity(5), log::Level::Trace);
/// ```
pub fn verbosity(verbose: usize) -> log::Level {
    match verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

pub fn init_logging(verbose: usize) -> Result<(), log::SetLoggerError> {
    simple_logger::init_with_level(verbosity(verbose))
}
