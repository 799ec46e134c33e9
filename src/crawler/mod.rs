// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Crawler discovery and selection.
//!
//! ```text
//! GET /api/1/crawlers
//!   200 --> normalize("items" | legacy "crawlers") --> [CrawlerSummary]
//!             |
//!             +-- token match (index/name)  --> selected
//!             +-- single entry              --> selected
//!             +-- many, non-interactive     --> first (CI contract)
//!             +-- many, interactive         --> numeric prompt, blank/out
//!                                               of range --> first
//!   401/403 --> AuthenticationFailed (causal enumeration)
//!   other   --> DiscoveryFailed (status + body verbatim)
//! ```
//!
//! Field-name drift in the remote API ("items" vs "crawlers", `source.index`
//! vs legacy `index`) is absorbed entirely by [`normalize`]; selection only
//! ever sees canonical [`CrawlerSummary`] values.

pub mod launch;

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::RunMode;
use crate::credentials::Credentials;
use crate::error::{ApiError, SyncResult};
use crate::net::ApiClient;
use crate::prompt::Prompt;

/// Index token identifying this site's crawler among others on the account.
pub const INDEX_TOKEN: &str = "logget";

/// List endpoint on the crawler-management host.
pub const CRAWLERS_PATH: &str = "/api/1/crawlers";

/// Lightweight remote crawler descriptor.
///
/// Fetched fresh on every run; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerSummary {
    /// Remote identifier, used for the re-index trigger.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Index names associated with the crawler (current and legacy fields).
    pub index_names: BTreeSet<String>,
}

impl CrawlerSummary {
    /// Case-insensitive substring match of `token` against the crawler's
    /// index names and display name.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.index_names
            .iter()
            .any(|index| index.to_lowercase().contains(&token))
            || self.name.to_lowercase().contains(&token)
    }
}

/// Raw list entry as the API sends it; current and legacy field layouts
/// both deserialize into this shape.
#[derive(Debug, Deserialize)]
struct RawCrawler {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    source: Option<RawSource>,
    /// Legacy top-level field from older API revisions.
    #[serde(default)]
    index: Option<IndexField>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    index: Option<IndexField>,
}

/// The index field has appeared both as a single name and as a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IndexField {
    One(String),
    Many(Vec<String>),
}

impl IndexField {
    fn collect_into(self, out: &mut BTreeSet<String>) {
        match self {
            Self::One(name) => {
                out.insert(name);
            }
            Self::Many(names) => out.extend(names),
        }
    }
}

impl From<RawCrawler> for CrawlerSummary {
    fn from(raw: RawCrawler) -> Self {
        let mut index_names = BTreeSet::new();
        if let Some(index) = raw.source.and_then(|source| source.index) {
            index.collect_into(&mut index_names);
        }
        if let Some(index) = raw.index {
            index.collect_into(&mut index_names);
        }

        Self {
            id: raw.id,
            name: raw.name,
            index_names,
        }
    }
}

/// Normalizes any recognized list-response shape into canonical summaries.
///
/// Returns `None` when no recognizable list field is present. Entries
/// without an `id` are skipped.
#[must_use]
pub fn normalize(body: &Value) -> Option<Vec<CrawlerSummary>> {
    let list = body
        .get("items")
        .and_then(Value::as_array)
        .or_else(|| body.get("crawlers").and_then(Value::as_array))?;

    Some(
        list.iter()
            .filter_map(|entry| {
                serde_json::from_value::<RawCrawler>(entry.clone())
                    .ok()
                    .map(CrawlerSummary::from)
            })
            .collect(),
    )
}

/// Lists the remote crawler configurations and selects the one relevant to
/// this site.
///
/// # Errors
///
/// - [`ApiError::AuthenticationFailed`] on 401/403.
/// - [`ApiError::NoCrawlerConfigured`] when the account has no crawlers.
/// - [`ApiError::DiscoveryFailed`] on any other non-success response or an
///   unrecognizable body shape.
/// - Transport errors from the underlying request.
pub async fn discover<P: Prompt>(
    client: &ApiClient,
    credentials: &Credentials,
    mode: RunMode,
    prompt: &mut P,
) -> SyncResult<CrawlerSummary> {
    info!("searching for configured crawlers");

    let response = client.get(CRAWLERS_PATH, &credentials.headers()).await?;

    match response.status {
        200 => {
            let crawlers = response
                .body
                .as_json()
                .and_then(normalize)
                .ok_or_else(|| ApiError::DiscoveryFailed {
                    status: response.status,
                    body: format!("unrecognized response shape: {}", response.body.render()),
                })?;

            select(crawlers, INDEX_TOKEN, mode, prompt).await
        }
        401 | 403 => Err(ApiError::AuthenticationFailed {
            status: response.status,
            detail: response.body.render(),
        }
        .into()),
        status => Err(ApiError::DiscoveryFailed {
            status,
            body: response.body.render(),
        }
        .into()),
    }
}

/// Selects one crawler from a normalized list; first match wins.
///
/// Non-interactive runs fall back to the first entry in listing order -
/// a documented contract for CI reproducibility, not a recommendation.
/// Interactive runs enumerate 1-based and clamp blank or out-of-range
/// answers to the first candidate.
///
/// # Errors
///
/// Returns [`ApiError::NoCrawlerConfigured`] for an empty list; prompt
/// I/O errors propagate.
pub async fn select<P: Prompt>(
    mut crawlers: Vec<CrawlerSummary>,
    token: &str,
    mode: RunMode,
    prompt: &mut P,
) -> SyncResult<CrawlerSummary> {
    if crawlers.is_empty() {
        return Err(ApiError::NoCrawlerConfigured.into());
    }

    if let Some(position) = crawlers.iter().position(|c| c.matches_token(token)) {
        let selected = crawlers.remove(position);
        info!(name = %selected.name, id = %selected.id, "found matching crawler");
        return Ok(selected);
    }

    info!(count = crawlers.len(), "no token match among crawlers");

    if crawlers.len() > 1 && mode.is_interactive() {
        println!("\nAvailable crawlers:");
        for (i, crawler) in crawlers.iter().enumerate() {
            println!("  {}. {} (ID: {})", i + 1, crawler.name, crawler.id);
        }

        let choice = prompt
            .ask("\nSelect the crawler number to use (or Enter for the first one): ")
            .await?;

        // Blank, unparsable and out-of-range answers all clamp to the
        // first candidate.
        let index = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < crawlers.len())
            .unwrap_or(0);

        let selected = crawlers.swap_remove(index);
        info!(name = %selected.name, id = %selected.id, "operator selected crawler");
        return Ok(selected);
    }

    // Single entry, or multiple in non-interactive mode: first in listing
    // order, deterministically. Non-empty per the guard above.
    let selected = crawlers.swap_remove(0);
    info!(name = %selected.name, id = %selected.id, "using first crawler");
    Ok(selected)
}

#[cfg(test)]
mod tests;
