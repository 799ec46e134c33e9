// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SyncError (~16 bytes)
//!                  |
//!      +-------+---+---+-------+
//!      v       v       v       v
//!  Credentials Api  Network  Io/Other
//!     Box      Box    Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Credential  Missing
//!   Api         AuthenticationFailed, NoCrawlerConfigured,
//!               DiscoveryFailed, LaunchFailed
//!   Network     Reqwest (DNS/connect/transport)
//!
//! All variants boxed => SyncError stays pointer-sized on the stack.
//! Every error is terminal for the current run; none are retried.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Credential resolution failed.
    #[error("credential error: {0}")]
    Credentials(#[from] Box<CredentialError>),

    /// Crawler API returned a terminal failure.
    #[error("crawler api error: {0}")]
    Api(#[from] Box<ApiError>),

    /// Transport-level network failure.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// I/O error (prompt input, stdout flush).
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    CredentialError => Credentials,
    ApiError => Api,
    NetworkError => Network,
    std::io::Error => Io,
}

// --- Credential Errors ---

/// Credential resolution errors.
///
/// The guidance text is part of the tool's contract: when automation fails
/// in CI there is no operator to ask, so the message must name both
/// configuration options and where to obtain each.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No usable credential pair was found in the environment.
    #[error(
        "no usable Algolia credentials found\n\
         \n\
         Option 1 (RECOMMENDED): crawler-scoped credentials\n\
         \x20  CRAWLER_USER_ID=your_crawler_user_id\n\
         \x20  CRAWLER_API_KEY=your_crawler_api_key\n\
         \x20  Get them from: https://crawler.algolia.com/admin/user/settings/\n\
         \n\
         Option 2: standard Algolia credentials\n\
         \x20  ALGOLIA_APP_ID=your_application_id\n\
         \x20  ALGOLIA_API_KEY=your_admin_api_key (or ALGOLIA_SEARCH_API_KEY)\n\
         \x20  Get them from: https://www.algolia.com/dashboard > Settings > API Keys"
    )]
    Missing,
}

// --- Crawler API Errors ---

/// Terminal failures reported by the crawler-management API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The list endpoint rejected our credentials (401/403).
    ///
    /// The causal enumeration below is deliberate: when the key type or
    /// ACL is wrong the server says nothing useful, so this message is
    /// where operators learn what to fix.
    #[error(
        "authentication failed: Unauthorized (status {status})\n\
         \x20  server response: {detail}\n\
         \n\
         Possible causes:\n\
         \x20  1. The API key does not have permission to access crawlers\n\
         \x20  2. The API key is not an Admin API Key or Crawler API Key\n\
         \x20  3. The API key has ACL restrictions that block Crawler API access\n\
         \x20  4. The Application ID does not match the API key\n\
         \n\
         Solutions:\n\
         \x20  1. Get Crawler-specific credentials (RECOMMENDED):\n\
         \x20     copy your User ID and API Key from\n\
         \x20     https://crawler.algolia.com/admin/user/settings/ and set\n\
         \x20     CRAWLER_USER_ID and CRAWLER_API_KEY\n\
         \x20  2. Or use an Admin API Key with crawler permissions enabled:\n\
         \x20     check the key's ACL under https://www.algolia.com/dashboard\n\
         \x20     > Settings > API Keys and verify ALGOLIA_APP_ID matches\n\
         \x20     your Application ID"
    )]
    AuthenticationFailed { status: u16, detail: String },

    /// The account has no crawler configured at all.
    #[error(
        "no configured crawlers found\n\
         \n\
         Create one first in the Algolia dashboard:\n\
         \x20  1. Go to https://www.algolia.com/dashboard > \"Crawlers\"\n\
         \x20  2. Create a new Web Crawler with index name `logget` and\n\
         \x20     start URL https://enegalan.github.io/logget-doc/\n\
         \x20  3. Copy your crawler User ID and API Key from\n\
         \x20     https://crawler.algolia.com/admin/user/settings/ into\n\
         \x20     CRAWLER_USER_ID and CRAWLER_API_KEY"
    )]
    NoCrawlerConfigured,

    /// Listing crawlers failed with an unexpected status or shape.
    #[error("failed to list crawlers (status {status}): {body}")]
    DiscoveryFailed { status: u16, body: String },

    /// The re-index trigger was rejected.
    #[error("failed to start crawler '{crawler_id}' (status {status}): {body}")]
    LaunchFailed {
        crawler_id: String,
        status: u16,
        body: String,
    },
}

// --- Network Errors ---

/// Transport-level network errors.
///
/// Non-2xx HTTP statuses are NOT network errors; callers interpret them.
/// Only DNS/connection/transport failures land here.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
