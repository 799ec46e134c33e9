// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync orchestrator.
//!
//! ```text
//! Start -> ResolveCredentials -> DiscoverCrawler -> LaunchCrawler -> Done
//!              |  ^                   |                  |
//!              |  '-- interactive    any failure --> Failed (exit 1)
//!              |      entry, once
//!              v
//!            Failed
//! ```
//!
//! Linear, no cycles; the interactive credential-entry branch is the only
//! re-entrant transition. One network call or one prompt in flight at a
//! time; every stage failure short-circuits with its remediation text.

use tracing::info;

use crate::config::{EnvConfig, RunMode};
use crate::crawler;
use crate::crawler::launch;
use crate::credentials;
use crate::error::SyncResult;
use crate::net::ApiClient;
use crate::prompt::Prompt;

/// Terminal outcome of one invocation.
///
/// Created once per run, not mutated afterward, consumed only to decide
/// the process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Whether the re-index was started.
    pub success: bool,
    /// The crawler that was acted on, when one was resolved.
    pub crawler_id: Option<String>,
    /// Operator-facing summary (monitoring URL or remediation text).
    pub message: String,
}

impl SyncOutcome {
    /// Successful outcome for a started crawler.
    #[must_use]
    pub const fn started(crawler_id: String, message: String) -> Self {
        Self {
            success: true,
            crawler_id: Some(crawler_id),
            message,
        }
    }

    /// Failed outcome carrying remediation text.
    #[must_use]
    pub const fn failed(message: String) -> Self {
        Self {
            success: false,
            crawler_id: None,
            message,
        }
    }
}

/// Runs one full sync: resolve credentials, discover the crawler, trigger
/// the re-index.
///
/// # Errors
///
/// Propagates the first stage failure; each error's display text carries
/// the stage-specific remediation.
pub async fn run<P: Prompt>(
    config: &EnvConfig,
    mode: RunMode,
    client: &ApiClient,
    prompt: &mut P,
) -> SyncResult<SyncOutcome> {
    info!("syncing Algolia indices");

    let credentials = credentials::resolve(config, mode, prompt).await?;
    let selected = crawler::discover(client, &credentials, mode, prompt).await?;
    let report = launch::start_reindex(client, &credentials, &selected.id).await?;

    Ok(SyncOutcome::started(
        report.crawler_id,
        format!(
            "re-index started for '{}'; monitor progress at {}",
            selected.name, report.monitor_url
        ),
    ))
}

/// Runs one sync and folds any failure into a [`SyncOutcome`].
pub async fn run_to_outcome<P: Prompt>(
    config: &EnvConfig,
    mode: RunMode,
    client: &ApiClient,
    prompt: &mut P,
) -> SyncOutcome {
    match run(config, mode, client, prompt).await {
        Ok(outcome) => outcome,
        Err(err) => SyncOutcome::failed(err.to_string()),
    }
}
