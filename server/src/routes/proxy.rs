//! Forwarder from `/api/*` to the document API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle only talks to its own origin. Requests under `/api`
//! are replayed against `DOCUMENT_API_URL` with the prefix stripped; method,
//! query string, body, and end-to-end headers pass through unchanged, and the
//! upstream status and body come back as-is.
//!
//! ERROR HANDLING
//! ==============
//! Only failures of the forwarding itself are produced here: an unreadable
//! or oversized body (413) or an unreachable upstream (502). Upstream error
//! statuses are passed through untouched.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Prefix stripped before forwarding.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("path is outside {API_PREFIX}: {0}")]
    InvalidPath(String),
    #[error("request body exceeds {limit} bytes or could not be read")]
    Body { limit: usize },
    #[error("document API unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::NOT_FOUND,
            Self::Body { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Map an incoming `/api/...` URI to the upstream URL.
///
/// Returns `None` when the path is not under [`API_PREFIX`].
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> Option<String> {
    let rest = uri.path().strip_prefix(API_PREFIX)?;
    if !(rest.is_empty() || rest.starts_with('/')) {
        return None;
    }
    let rest = if rest.is_empty() { "/" } else { rest };
    let mut url = format!("{}{rest}", base.trim_end_matches('/'));
    if let Some(query) = uri.query() {
        url.push('?');
        url.push_str(query);
    }
    Some(url)
}

/// Headers meaningful only for a single connection, plus the ones the HTTP
/// client recomputes.
pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

pub(crate) fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}` — replay the request against the document API.
///
/// # Errors
///
/// Returns a [`ProxyError`] if the body cannot be buffered or the upstream
/// cannot be reached.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.config.document_api_url, &parts.uri)
        .ok_or_else(|| ProxyError::InvalidPath(parts.uri.path().to_owned()))?;

    let limit = state.config.max_body_bytes;
    let bytes = to_bytes(body, limit).await.map_err(|_| ProxyError::Body { limit })?;

    tracing::debug!(method = %parts.method, %url, body_len = bytes.len(), "forwarding to document API");

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(end_to_end_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, %url, "document API request failed"))?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let body = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%status, %url, "document API returned an error");
    }

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    if !response.headers().contains_key(header::CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/octet-stream"));
    }
    Ok(response)
}
