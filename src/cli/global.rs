// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Logs which credential variables are present (never their values).
    /// The DEBUG environment variable has the same effect.
    #[arg(long)]
    pub debug: bool,
}
