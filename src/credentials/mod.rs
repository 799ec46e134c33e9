// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credential resolution.
//!
//! ```text
//! resolve(env, mode, prompt)
//!        |
//!   CRAWLER_USER_ID + CRAWLER_API_KEY?  --> Crawler (Basic auth)
//!        |
//!   ALGOLIA_APP_ID + ALGOLIA_API_KEY
//!   (or ALGOLIA_SEARCH_API_KEY)?        --> Standard (vendor headers)
//!        |
//!   Interactive? ask scheme, ask fields --> re-resolve once
//!        |
//!   CredentialError::Missing (names both options)
//! ```
//!
//! The chosen scheme and a redacted key preview are logged; the raw
//! secret never is.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use crate::config::{EnvConfig, RunMode};
use crate::error::{CredentialError, SyncResult};
use crate::prompt::{Prompt, is_affirmative};

/// Resolved authentication material for one run.
///
/// Exactly one variant is active per run; `api_key` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Crawler-scoped pair (preferred); sent as a Basic authorization header.
    Crawler { user_id: String, api_key: String },
    /// Standard application pair (legacy fallback); sent as two vendor headers.
    Standard { app_id: String, api_key: String },
}

impl Credentials {
    /// Builds credentials from captured configuration, if a complete pair
    /// is present. Crawler-scoped variables win over standard ones.
    #[must_use]
    pub fn from_config(config: &EnvConfig) -> Option<Self> {
        if let (Some(user_id), Some(api_key)) =
            (config.crawler_user_id.clone(), config.crawler_api_key.clone())
        {
            return Some(Self::Crawler { user_id, api_key });
        }

        if let (Some(app_id), Some(api_key)) = (config.app_id.clone(), config.api_key.clone()) {
            return Some(Self::Standard { app_id, api_key });
        }

        None
    }

    /// Short name of the active scheme, for logging.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Crawler { .. } => "crawler",
            Self::Standard { .. } => "standard",
        }
    }

    /// The active API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        match self {
            Self::Crawler { api_key, .. } | Self::Standard { api_key, .. } => api_key,
        }
    }

    /// Authentication headers for the crawler-management endpoints.
    ///
    /// Both forms are accepted by the same endpoints: crawler credentials
    /// use a Basic-encoded `user_id:api_key`, standard credentials the two
    /// vendor-specific headers.
    #[must_use]
    pub fn headers(&self) -> Vec<(String, String)> {
        match self {
            Self::Crawler { user_id, api_key } => {
                let encoded = BASE64.encode(format!("{user_id}:{api_key}"));
                vec![("Authorization".to_string(), format!("Basic {encoded}"))]
            }
            Self::Standard { app_id, api_key } => vec![
                ("X-Algolia-Application-Id".to_string(), app_id.clone()),
                ("X-Algolia-API-Key".to_string(), api_key.clone()),
            ],
        }
    }
}

/// Redacts a secret for log output: first 4 / last 4 characters when the
/// key is long enough to keep some entropy hidden, fully masked otherwise.
///
/// Counted in characters, not bytes; keys are arbitrary secret strings
/// and must never panic the logging path.
#[must_use]
pub fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

/// Resolves credentials from configuration, falling back to interactive
/// entry when attached to a terminal.
///
/// The interactive branch is the only re-entrant step of the run: once the
/// operator supplies values, resolution is retried exactly once with the
/// updated configuration.
///
/// # Errors
///
/// Returns [`CredentialError::Missing`] when no complete pair can be
/// resolved; the error text names both configuration options.
pub async fn resolve<P: Prompt>(
    config: &EnvConfig,
    mode: RunMode,
    prompt: &mut P,
) -> SyncResult<Credentials> {
    if config.debug {
        config.log_presence();
    }

    if let Some(credentials) = Credentials::from_config(config) {
        log_resolved(&credentials);
        return Ok(credentials);
    }

    if mode.is_interactive() {
        let updated = prompt_for_credentials(config, prompt).await?;
        if let Some(credentials) = Credentials::from_config(&updated) {
            log_resolved(&credentials);
            return Ok(credentials);
        }
    }

    Err(CredentialError::Missing.into())
}

fn log_resolved(credentials: &Credentials) {
    info!(
        scheme = credentials.scheme(),
        key = %redact(credentials.api_key()),
        "resolved credentials"
    );
}

async fn prompt_for_credentials<P: Prompt>(
    config: &EnvConfig,
    prompt: &mut P,
) -> SyncResult<EnvConfig> {
    println!("Enter your Algolia credentials:");
    println!("  Option 1 (RECOMMENDED): Crawler-specific credentials");
    println!("     Get them from: https://crawler.algolia.com/admin/user/settings/");
    println!("  Option 2: Admin API Key");
    println!("     Get it from: https://www.algolia.com/dashboard > Settings > API Keys");
    println!();

    let use_crawler = prompt.ask("Use Crawler credentials? (y/n): ").await?;

    let updated = if is_affirmative(&use_crawler) {
        let user_id = prompt.ask("Crawler User ID: ").await?;
        let api_key = prompt.ask("Crawler API Key: ").await?;
        config.clone().with_crawler_credentials(user_id, api_key)
    } else {
        let app_id = prompt.ask("Application ID: ").await?;
        let api_key = prompt.ask("API Key: ").await?;
        config.clone().with_standard_credentials(app_id, api_key)
    };

    Ok(updated)
}

#[cfg(test)]
mod tests;
