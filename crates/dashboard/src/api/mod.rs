//! ISP backend REST API client.
//!
//! Typed access to the upstream ISP backend that owns customers, operators,
//! technicians, vendors, invoices, complaints, plans, follow-ups and
//! analytics. Every call is made on behalf of a bearer token: the logged-in
//! user's token in the dashboard, or the configured service token in the CLI.
//!
//! # Wire format
//!
//! - Responses are either bare JSON or wrapped as `{ "data": ... }`
//! - Records are converted to the flat view models in `isp_console_core`
//!   by [`conversions`]
//! - Status mutations are `PATCH <resource>/{id}/status` with `{ "status" }`

mod accounts;
mod analytics;
mod auth;
mod billing;
pub mod conversions;
mod support;
pub mod types;

pub use auth::LoginResult;

use std::borrow::Cow;
use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::IspApiConfig;
use types::Envelope;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Percent-encode a record id as exactly one URL path segment.
///
/// Ids come straight from request paths, so `/`, `?` and `#` must not leak
/// into the upstream URL. Dot segments are refused: the URL parser resolves
/// them before the request is sent.
pub(crate) fn path_segment(id: &str) -> Result<Cow<'_, str>, IspApiError> {
    if matches!(id, "" | "." | "..") {
        return Err(IspApiError::NotFound(format!("invalid id {id:?}")));
    }
    Ok(urlencoding::encode(id))
}

/// Errors that can occur when talking to the ISP backend.
#[derive(Debug, Error)]
pub enum IspApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The token was missing, expired or rejected.
    #[error("Unauthorized: token rejected by the ISP backend")]
    Unauthorized,
}

/// ISP backend API client.
///
/// Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct IspApiClient {
    inner: Arc<IspApiClientInner>,
}

struct IspApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl IspApiClient {
    /// Create a new ISP backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &IspApiConfig) -> Result<Self, IspApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(IspApiClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// The backend base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Execute a GET request and unwrap the response envelope.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, IspApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        token: &str,
    ) -> Result<T, IspApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Execute a POST request and parse the response body.
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, IspApiError> {
        let mut request = self.inner.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Execute a PUT request, ignoring the response body.
    pub(crate) async fn put<B: serde::Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<(), IspApiError> {
        let response = self
            .inner
            .client
            .put(self.url(path))
            .json(body)
            .bearer_auth(token)
            .send()
            .await?;
        self.expect_success(response).await
    }

    /// Execute a PATCH request, ignoring the response body.
    pub(crate) async fn patch<B: serde::Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<(), IspApiError> {
        let response = self
            .inner
            .client
            .patch(self.url(path))
            .json(body)
            .bearer_auth(token)
            .send()
            .await?;
        self.expect_success(response).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str, token: &str) -> Result<(), IspApiError> {
        let response = self
            .inner
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        self.expect_success(response).await
    }

    /// Check that the backend answers at all.
    ///
    /// Any HTTP response counts, including 401: readiness is about the
    /// network path, not about the token.
    ///
    /// # Errors
    ///
    /// Returns `IspApiError::Http` if the request could not be completed.
    #[tracing::instrument(skip(self, token))]
    pub async fn ping(&self, token: Option<&str>) -> Result<(), IspApiError> {
        let mut request = self.inner.client.get(self.url("/plans"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        tracing::debug!(status = response.status().as_u16(), "ISP backend reachable");
        Ok(())
    }

    /// Handle API response, accepting bare or `{ "data": ... }` bodies.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, IspApiError> {
        let status = response.status();

        if status.is_success() {
            let envelope: Envelope<T> = response
                .json()
                .await
                .map_err(|e| IspApiError::Parse(format!("Failed to parse response: {e}")))?;
            return Ok(envelope.into_inner());
        }

        Err(self.parse_error(response).await)
    }

    async fn expect_success(&self, response: reqwest::Response) -> Result<(), IspApiError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.parse_error(response).await)
    }

    /// Parse error response from the backend.
    async fn parse_error(&self, response: reqwest::Response) -> IspApiError {
        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return IspApiError::RateLimited(retry_after);
        }

        if status == 401 || status == 403 {
            return IspApiError::Unauthorized;
        }

        if status == 404 {
            return IspApiError::NotFound(response.url().path().to_string());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        IspApiError::Api {
            status,
            message: types::error_message(&body),
        }
    }
}

impl std::fmt::Debug for IspApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IspApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
