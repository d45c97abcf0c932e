//! REST API helpers for the document assistant endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! server's `/api` forwarder.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` instead of panicking so a failed
//! call degrades into a message on screen rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{QueryResponse, SummarizeResponse};
#[cfg(feature = "hydrate")]
use super::types::{StatusMessage, UploadResponse};

/// Path prefix the server forwards to the document API.
pub const API_PREFIX: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
const NOT_FOUND_STATUS: u16 = 404;

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(name: &str) -> String {
    format!("{API_PREFIX}/{name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(op: &str, status: u16) -> String {
    format!("{op} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_memory_missing_message(status: u16) -> Option<String> {
    (status == NOT_FOUND_STATUS).then(|| "No memory found for session.".to_owned())
}

#[cfg(feature = "hydrate")]
fn form_with(fields: &[(&str, &str)]) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

/// Request a summary for an uploaded document via `GET /api/summarize?doc_id=...`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a summarize payload.
pub async fn summarize_document(document_id: &str) -> Result<SummarizeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("summarize"))
            .query([("doc_id", document_id)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("summarize", resp.status()));
        }
        resp.json::<SummarizeResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = document_id;
        Err("not available on server".to_owned())
    }
}

/// Upload a document via multipart `POST /api/upload` (field `file`).
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails,
/// or the server rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    let resp = gloo_net::http::Request::post(&endpoint("upload"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("upload", resp.status()));
    }
    resp.json::<UploadResponse>().await.map_err(|e| e.to_string())
}

/// Ask a question about uploaded content via `POST /api/ask`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn ask_question(question: &str, session_id: &str) -> Result<QueryResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = form_with(&[("question", question), ("session_id", session_id)])?;
        let resp = gloo_net::http::Request::post(&endpoint("ask"))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("ask", resp.status()));
        }
        resp.json::<QueryResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (question, session_id);
        Err("not available on server".to_owned())
    }
}

/// Clear the conversation memory for a session via `POST /api/reset_memory`.
///
/// Returns the server's status line on success.
///
/// # Errors
///
/// Returns an error string if the request fails, the session has no memory,
/// or the server responds with a non-OK status.
pub async fn reset_memory(session_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = form_with(&[("session_id", session_id)])?;
        let resp = gloo_net::http::Request::post(&endpoint("reset_memory"))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if let Some(message) = reset_memory_missing_message(resp.status()) {
            return Err(message);
        }
        if !resp.ok() {
            return Err(request_failed_message("reset memory", resp.status()));
        }
        let body: StatusMessage = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.status)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err("not available on server".to_owned())
    }
}
