// docsync-rs: Algolia Crawler Sync Tool for the logget docs
//
// SPDX-FileCopyrightText: 2026 Enegalan
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network module: minimal JSON-over-HTTPS request wrapper.
//!
//! ```text
//! ApiClient::new() --> get(path, headers) / post(path, headers)
//!        |
//!        v
//!   exactly one request, no retries, transport timeout only
//!        |
//!        v
//!   ApiResponse { status, body }
//!     body: JSON if it parses, raw text otherwise (never an error)
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```
//!
//! Callers interpret non-2xx statuses themselves; only transport failures
//! (DNS, connect, TLS) reject.

use std::sync::OnceLock;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::trace;

use crate::error::{NetworkError, SyncResult};

/// Production crawler-management host.
pub const DEFAULT_BASE_URL: &str = "https://crawler.algolia.com";

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("logget's docsync-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Response body: parsed JSON when the payload decodes, raw text otherwise.
///
/// The fallback is deliberate - a parse failure degrades to text instead of
/// aborting the request, so server diagnostics are always surfaceable.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Payload decoded as JSON.
    Json(Value),
    /// Payload kept verbatim.
    Text(String),
}

impl Body {
    fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// Returns the JSON value, if the body decoded as JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Renders the body for error messages and logs.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}

/// Status and body of one completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body.
    pub body: Body,
}

/// JSON API client bound to one host.
///
/// Thin wrapper over the shared [`Client`]: one request per call, no
/// automatic retries, no timeout override beyond the transport default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Creates a client for the production host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for an arbitrary base URL (tests point this at a
    /// mock server).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: global_client().clone(),
            base_url: base_url.into(),
        }
    }

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure; non-2xx statuses are
    /// returned to the caller for interpretation.
    pub async fn get(&self, path: &str, headers: &[(String, String)]) -> SyncResult<ApiResponse> {
        self.request(Method::GET, path, headers).await
    }

    /// Issues a POST request with an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn post(&self, path: &str, headers: &[(String, String)]) -> SyncResult<ApiResponse> {
        self.request(Method::POST, path, headers).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        headers: &[(String, String)],
    ) -> SyncResult<ApiResponse> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(NetworkError::Reqwest)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(NetworkError::Reqwest)?;

        trace!(url, status, "request completed");

        Ok(ApiResponse {
            status,
            body: Body::from_text(text),
        })
    }
}
