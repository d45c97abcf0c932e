//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the document API's JSON payloads so the page, the
//! summarize button, and the REST helpers all agree on one schema. They carry
//! no behavior beyond a few display helpers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A single evidential snippet supporting an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Snippet text taken from the uploaded document.
    pub text: String,
    /// Retrieval confidence. The API reports a percentage, but any finite
    /// value is accepted.
    pub confidence: f64,
}

impl Source {
    /// Confidence clamped to `0..=100` and rounded for display.
    #[must_use]
    pub fn confidence_percent(&self) -> u8 {
        if !self.confidence.is_finite() {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = self.confidence.clamp(0.0, 100.0).round() as u8;
        pct
    }
}

/// Result of a question-answering call (`POST /ask`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Natural-language answer.
    pub answer: String,
    /// Snippets the answer was built from, most relevant first.
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Conversation session echoed by the API, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Question echoed by the API, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Describes a completed upload (`POST /upload`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Upload status string, `"success"` on the happy path.
    pub status: String,
    /// Original file name.
    pub file: String,
    /// Lower-cased file extension (e.g. `"pdf"`).
    pub filetype: String,
    /// Number of chunks the document was split into.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub chunks: u32,
    /// Document reference used by the summarize call.
    ///
    /// The upload endpoint does not currently return this field; the
    /// summarize flow reads it anyway. It is optional so an upload without
    /// it parses cleanly and counts as "no usable document reference".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

impl UploadResponse {
    /// The document reference exactly as returned, if present and non-blank.
    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        self.doc_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// Result of a summarize call (`GET /summarize`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Server-produced summary text.
    pub summary: String,
}

/// Body of `POST /reset_memory` responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Human-readable status (e.g. `"Memory cleared."`).
    pub status: String,
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
