//! Pass-through of the widget's `/chat` and `/reset` calls to the FAQ backend.
//!
//! DESIGN
//! ======
//! The browser talks to this host only, so the backend's session cookie has
//! to travel through it: `cookie` goes upstream, `set-cookie` comes back.
//! Status and body are returned unchanged; the widget decides what counts
//! as a failure.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;

/// Request headers forwarded to the backend.
static FORWARD_REQUEST_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, COOKIE];

/// Response headers returned to the browser.
static FORWARD_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

/// Errors produced while forwarding to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The backend could not be reached or timed out.
    #[error("backend request failed: {0}")]
    UpstreamRequest(String),

    /// The backend response body could not be read.
    #[error("backend response read failed: {0}")]
    UpstreamBody(String),
}

impl ProxyError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamRequest(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "faq backend proxy failed");
        let body = axum::Json(serde_json::json!({ "error": "backend unavailable" }));
        (self.status_code(), body).into_response()
    }
}

/// HTTP client bound to the FAQ backend.
#[derive(Debug, Clone)]
pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// Build the backend client from host config.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::HttpClientBuild` if the TLS/HTTP client cannot
    /// be constructed.
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.backend_url.clone() })
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST `body` to `path` on the backend and mirror the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or its body cannot
    /// be read. Non-2xx statuses are not errors; they are passed through.
    pub async fn forward(&self, path: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
        let url = self.endpoint(path);
        let resp = self
            .http
            .post(&url)
            .headers(select_headers(headers, &FORWARD_REQUEST_HEADERS))
            .body(body)
            .send()
            .await
            .map_err(|e| ProxyError::UpstreamRequest(e.to_string()))?;

        let status = resp.status();
        let resp_headers = select_headers(resp.headers(), &FORWARD_RESPONSE_HEADERS);
        let resp_body = resp
            .bytes()
            .await
            .map_err(|e| ProxyError::UpstreamBody(e.to_string()))?;

        tracing::debug!(%url, %status, bytes = resp_body.len(), "faq backend responded");
        Ok((status, resp_headers, resp_body).into_response())
    }
}

/// Copy every value of the named headers from `src`.
#[must_use]
pub fn select_headers(src: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in src.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
