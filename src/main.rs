// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! .env --> cli::parse() --> Logging --> sync::run_to_outcome --> ExitCode
//! ```

use std::process::ExitCode;

use docsync_rs::cli::global::GlobalOptions;
use docsync_rs::cli::{self, Command};
use docsync_rs::config::{EnvConfig, RunMode};
use docsync_rs::logging::{LogConfig, LogLevel, init_logging};
use docsync_rs::net::ApiClient;
use docsync_rs::prompt::StdinPrompt;
use docsync_rs::sync;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a .env file next to the docs checkout.
    dotenvy::dotenv().ok();

    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Command::Sync) | None => run_sync_command(&cli.global).await,
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn run_sync_command(global: &GlobalOptions) -> ExitCode {
    let mut config = EnvConfig::from_env();
    config.debug = config.debug || global.debug;

    let mode = RunMode::detect();
    let client = ApiClient::new();
    // Opened once here; dropped on every exit path when the run returns.
    let mut prompt = StdinPrompt::new();

    let outcome = sync::run_to_outcome(&config, mode, &client, &mut prompt).await;

    if outcome.success {
        println!("{}", outcome.message);
        ExitCode::SUCCESS
    } else {
        eprintln!("Error: {}", outcome.message);
        ExitCode::FAILURE
    }
}
