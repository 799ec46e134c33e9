// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! ```text
//! docsync [global options]            run the sync (default)
//! docsync [global options] sync      same, explicit
//! docsync version                    print the version
//! ```
//!
//! Behavior branches on environment variables and TTY attachment, not on
//! positional arguments; the flags here only tune logging and diagnostics.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Algolia crawler re-index tool for the logget documentation site.
#[derive(Debug, Parser)]
#[command(
    name = "docsync",
    author,
    version,
    about = "Triggers a re-index of the logget docs in Algolia",
    long_about = "Triggers a re-index of the published logget documentation in\n\
                  Algolia's hosted crawler service.\n\n\
                  Credentials are read from the environment (a .env file is\n\
                  honored): either CRAWLER_USER_ID/CRAWLER_API_KEY (preferred)\n\
                  or ALGOLIA_APP_ID with ALGOLIA_API_KEY or\n\
                  ALGOLIA_SEARCH_API_KEY. When run from a terminal with no\n\
                  credentials configured, the tool asks for them interactively;\n\
                  in CI it fails with setup instructions instead."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Triggers the re-index (also the default when no command is given).
    Sync,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
