// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Re-index trigger.
//!
//! Fire-and-forget: `POST /api/1/crawlers/{id}/reindex` starts the job and
//! the tool reports a dashboard URL for progress; completion is never
//! polled.

use tracing::info;

use crate::credentials::Credentials;
use crate::error::{ApiError, SyncResult};
use crate::net::ApiClient;

/// Outcome of a successfully triggered re-index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// The crawler that was started.
    pub crawler_id: String,
    /// Dashboard URL for monitoring indexing progress.
    pub monitor_url: String,
}

/// Dashboard URL where a crawler's progress can be watched.
#[must_use]
pub fn monitor_url(crawler_id: &str) -> String {
    format!("https://www.algolia.com/dashboard/crawlers/{crawler_id}")
}

/// Issues the re-index trigger for `crawler_id`.
///
/// 200 and 201 both count as started; anything else is a
/// [`ApiError::LaunchFailed`] carrying the response body verbatim.
///
/// # Errors
///
/// Returns an error on a non-started status or transport failure.
pub async fn start_reindex(
    client: &ApiClient,
    credentials: &Credentials,
    crawler_id: &str,
) -> SyncResult<LaunchReport> {
    info!(crawler_id, "starting crawler re-index");

    let path = format!("/api/1/crawlers/{crawler_id}/reindex");
    let response = client.post(&path, &credentials.headers()).await?;

    match response.status {
        200 | 201 => {
            let report = LaunchReport {
                crawler_id: crawler_id.to_string(),
                monitor_url: monitor_url(crawler_id),
            };
            info!(
                crawler_id,
                monitor_url = %report.monitor_url,
                "crawler started; indexing may take several minutes"
            );
            Ok(report)
        }
        status => Err(ApiError::LaunchFailed {
            crawler_id: crawler_id.to_string(),
            status,
            body: response.body.render(),
        }
        .into()),
    }
}
