//! Page state for the document assistant screen.
//!
//! DESIGN
//! ======
//! Mirrors the upload/ask lifecycle as plain fields plus small transition
//! helpers. The page holds it in one `RwSignal`; async work lives in the
//! page, and these helpers decide what each result does to the screen.
//!
//! The browser `File` handle is not kept here. The upload widget reads it
//! from its file input when the upload starts, and this state only tracks
//! the selected name.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::types::{QueryResponse, UploadResponse};

/// Validation message for an empty question.
pub const EMPTY_QUESTION_MESSAGE: &str = "Enter a question first.";

/// Validation message for an upload without a selected file.
pub const NO_FILE_MESSAGE: &str = "Choose a file to upload.";

/// State of the document assistant page.
#[derive(Clone, Debug, Default)]
pub struct DocumentAssistantState {
    /// Name of the file currently selected in the upload input.
    pub file_name: Option<String>,
    /// Question text as typed.
    pub question: String,
    /// Most recent answer.
    pub response: Option<QueryResponse>,
    pub is_uploading: bool,
    pub is_asking: bool,
    /// Most recent successful upload.
    pub upload_success: Option<UploadResponse>,
    /// Page-level error banner text.
    pub error: Option<String>,
    /// Conversation session used for `ask` and memory reset.
    pub session_id: String,
}

impl DocumentAssistantState {
    /// Fresh state bound to a conversation session.
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into(), ..Self::default() }
    }

    /// Record a file selection (or its removal).
    pub fn select_file(&mut self, file_name: Option<String>) {
        self.file_name = file_name.filter(|name| !name.is_empty());
        self.error = None;
    }

    /// Start an upload. Returns `false` if one is running or nothing is selected.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading {
            return false;
        }
        if self.file_name.is_none() {
            self.error = Some(NO_FILE_MESSAGE.to_owned());
            return false;
        }
        self.is_uploading = true;
        self.error = None;
        true
    }

    /// Apply an upload result.
    pub fn finish_upload(&mut self, result: Result<UploadResponse, String>) {
        self.is_uploading = false;
        match result {
            Ok(upload) => {
                self.upload_success = Some(upload);
                self.response = None;
            }
            Err(err) => self.error = Some(format!("Upload failed: {err}")),
        }
    }

    /// Trimmed question, or the validation message if it is blank.
    ///
    /// # Errors
    ///
    /// Returns [`EMPTY_QUESTION_MESSAGE`] when the question is blank.
    pub fn validate_question(&self) -> Result<String, &'static str> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(EMPTY_QUESTION_MESSAGE);
        }
        Ok(question.to_owned())
    }

    /// Start asking. Returns the question to send, or `None` if the call
    /// must not happen.
    pub fn begin_ask(&mut self) -> Option<String> {
        if self.is_asking {
            return None;
        }
        match self.validate_question() {
            Ok(question) => {
                self.is_asking = true;
                self.error = None;
                Some(question)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Apply an ask result.
    pub fn finish_ask(&mut self, result: Result<QueryResponse, String>) {
        self.is_asking = false;
        match result {
            Ok(response) => {
                self.response = Some(response);
                self.question.clear();
            }
            Err(err) => self.error = Some(format!("Failed to answer question: {err}")),
        }
    }

    /// Apply a memory reset result.
    pub fn clear_conversation(&mut self, result: Result<String, String>) {
        match result {
            Ok(_) => {
                self.response = None;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Whether the ask button should be enabled.
    #[must_use]
    pub fn can_ask(&self) -> bool {
        !self.is_asking && !self.question.trim().is_empty()
    }
}
