// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-derived configuration.
//!
//! ```text
//! .env (dotenvy, optional)
//!        |
//!        v
//! process environment --> EnvConfig::from_env()   (once, at startup)
//!                              |
//!   CRAWLER_USER_ID            |   RunMode::detect()
//!   CRAWLER_API_KEY            |   stdin TTY? -> Interactive
//!   ALGOLIA_APP_ID             |   else      -> NonInteractive
//!   ALGOLIA_API_KEY            |
//!   ALGOLIA_SEARCH_API_KEY     v
//!   DEBUG                 passed by reference through the run
//! ```
//!
//! The environment is read exactly once into an [`EnvConfig`] value that is
//! passed through the orchestrator. Components never read `std::env`
//! themselves, which keeps the credential-precedence rule testable.

use std::io::IsTerminal;

use tracing::debug;

/// Crawler-scoped user id variable (preferred scheme).
pub const CRAWLER_USER_ID: &str = "CRAWLER_USER_ID";
/// Crawler-scoped API key variable (preferred scheme).
pub const CRAWLER_API_KEY: &str = "CRAWLER_API_KEY";
/// Standard application id variable.
pub const ALGOLIA_APP_ID: &str = "ALGOLIA_APP_ID";
/// Standard admin API key variable.
pub const ALGOLIA_API_KEY: &str = "ALGOLIA_API_KEY";
/// Accepted fallback name for the standard API key.
pub const ALGOLIA_SEARCH_API_KEY: &str = "ALGOLIA_SEARCH_API_KEY";
/// Enables credential-presence logging (never logs values).
pub const DEBUG: &str = "DEBUG";

/// Snapshot of the recognized environment variables.
///
/// Empty or whitespace-only values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Crawler-scoped user id, if set.
    pub crawler_user_id: Option<String>,
    /// Crawler-scoped API key, if set.
    pub crawler_api_key: Option<String>,
    /// Standard application id, if set.
    pub app_id: Option<String>,
    /// Standard API key (`ALGOLIA_API_KEY` wins over `ALGOLIA_SEARCH_API_KEY`).
    pub api_key: Option<String>,
    /// Verbose credential-presence logging.
    pub debug: bool,
}

impl EnvConfig {
    /// Captures the recognized variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Captures configuration through an arbitrary lookup function.
    ///
    /// This is the seam the tests use: precedence rules can be exercised
    /// without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            crawler_user_id: get(CRAWLER_USER_ID),
            crawler_api_key: get(CRAWLER_API_KEY),
            app_id: get(ALGOLIA_APP_ID),
            api_key: get(ALGOLIA_API_KEY).or_else(|| get(ALGOLIA_SEARCH_API_KEY)),
            debug: get(DEBUG).is_some(),
        }
    }

    /// Returns a copy with crawler-scoped credentials filled in.
    ///
    /// Used by the interactive credential-entry branch; values pass through
    /// the same empty-string filtering as environment capture.
    #[must_use]
    pub fn with_crawler_credentials(mut self, user_id: String, api_key: String) -> Self {
        self.crawler_user_id = Some(user_id).filter(|v| !v.trim().is_empty());
        self.crawler_api_key = Some(api_key).filter(|v| !v.trim().is_empty());
        self
    }

    /// Returns a copy with standard credentials filled in.
    #[must_use]
    pub fn with_standard_credentials(mut self, app_id: String, api_key: String) -> Self {
        self.app_id = Some(app_id).filter(|v| !v.trim().is_empty());
        self.api_key = Some(api_key).filter(|v| !v.trim().is_empty());
        self
    }

    /// Logs which variables are present. Never logs values.
    pub fn log_presence(&self) {
        let presence = |value: &Option<String>| if value.is_some() { "set" } else { "not set" };

        debug!(
            crawler_user_id = presence(&self.crawler_user_id),
            crawler_api_key = presence(&self.crawler_api_key),
            app_id = presence(&self.app_id),
            api_key = presence(&self.api_key),
            "credentials check"
        );
    }
}

/// Whether the run may ask the operator questions.
///
/// Recomputed each run from TTY attachment, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Stdin is a terminal; prompting is allowed.
    Interactive,
    /// Detached stdin (CI); all disambiguation must be deterministic.
    NonInteractive,
}

impl RunMode {
    /// Detects the run mode from stdin TTY attachment.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            Self::Interactive
        } else {
            Self::NonInteractive
        }
    }

    /// Returns true in [`RunMode::Interactive`].
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}
