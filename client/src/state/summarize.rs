//! Summarize button state machine.
//!
//! DESIGN
//! ======
//! The component keeps one `SummarizeState` in a signal and drives it with
//! three inputs: the observed document reference, clicks, and settled API
//! results. Everything here is synchronous and free of Leptos types so the
//! lifecycle can be tested without a reactive runtime.
//!
//! Each document change advances a generation counter. A dispatched call
//! carries the generation it was issued under in its `SummarizeTicket`; a
//! result whose generation is no longer current is dropped, so the last
//! observed document always wins. The loading flag is held until the
//! in-flight call settles, even across a document change, which keeps at
//! most one call in flight per button.

#[cfg(test)]
#[path = "summarize_test.rs"]
mod summarize_test;

use crate::net::types::SummarizeResponse;

/// Shown when the button is pressed before any usable upload.
pub const NO_DOCUMENT_MESSAGE: &str = "Please upload a document first.";

/// Shown when the summarize call fails for any reason.
pub const FAILED_MESSAGE: &str = "Failed to summarize.";

/// What the summary area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SummaryView {
    /// Nothing rendered.
    #[default]
    Idle,
    /// A summary returned by the API.
    Summary(String),
    /// Clicked without a usable document reference.
    NoDocument,
    /// The last call failed.
    Failed,
}

impl SummaryView {
    /// Text for the summary area, if anything should render.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Summary(text) => Some(text),
            Self::NoDocument => Some(NO_DOCUMENT_MESSAGE),
            Self::Failed => Some(FAILED_MESSAGE),
        }
    }
}

/// A dispatched summarize call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarizeTicket {
    /// Document the summary was requested for.
    pub document_id: String,
    /// Generation the call was issued under.
    pub generation: u64,
}

/// Outcome of a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummarizeRequest {
    /// Issue exactly one API call for this ticket.
    Dispatch(SummarizeTicket),
    /// No usable document; the "upload first" message is now showing.
    MissingDocument,
    /// A call is already in flight; the click is ignored.
    Busy,
}

/// Outcome of settling a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The summary is now displayed.
    Displayed,
    /// The failure message is now displayed.
    Failed,
    /// The document changed after dispatch; the result was dropped.
    Stale,
}

/// Per-mount state of the summarize button.
#[derive(Clone, Debug, Default)]
pub struct SummarizeState {
    document_id: Option<String>,
    generation: u64,
    loading: bool,
    view: SummaryView,
    last_error: Option<String>,
}

impl SummarizeState {
    /// Record the currently observed document reference.
    ///
    /// Blank identifiers count as absent; others are kept verbatim. When the
    /// reference differs from the previous one the display resets to idle and
    /// the generation advances; an in-flight call keeps running. Returns
    /// `true` if a reset happened.
    pub fn observe_document(&mut self, document_id: Option<&str>) -> bool {
        let next = document_id.filter(|id| !id.trim().is_empty());
        if next == self.document_id.as_deref() {
            return false;
        }
        self.document_id = next.map(str::to_owned);
        self.generation += 1;
        self.view = SummaryView::Idle;
        true
    }

    /// Handle a click on the summarize button.
    pub fn request(&mut self) -> SummarizeRequest {
        if self.loading {
            return SummarizeRequest::Busy;
        }
        let Some(document_id) = self.document_id.clone() else {
            self.view = SummaryView::NoDocument;
            return SummarizeRequest::MissingDocument;
        };
        self.loading = true;
        SummarizeRequest::Dispatch(SummarizeTicket { document_id, generation: self.generation })
    }

    /// Apply the result of a dispatched call.
    ///
    /// Always clears the loading flag. Error details go to the diagnostic
    /// slot and never reach the display.
    pub fn settle(&mut self, ticket: &SummarizeTicket, result: Result<SummarizeResponse, String>) -> SettleOutcome {
        self.loading = false;
        let current = ticket.generation == self.generation;
        match result {
            Ok(resp) if current => {
                self.view = SummaryView::Summary(resp.summary);
                SettleOutcome::Displayed
            }
            Err(err) => {
                self.last_error = Some(err);
                if current {
                    self.view = SummaryView::Failed;
                    SettleOutcome::Failed
                } else {
                    SettleOutcome::Stale
                }
            }
            Ok(_) => SettleOutcome::Stale,
        }
    }

    /// Document reference the next click would summarize.
    #[cfg(test)]
    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Current display state.
    #[must_use]
    pub fn view(&self) -> &SummaryView {
        &self.view
    }

    /// Text for the summary area, if anything should render.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.view.text()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the button should be disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.loading
    }

    /// Detail of the most recent failed call, for diagnostics only.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
