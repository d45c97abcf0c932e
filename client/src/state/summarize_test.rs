use super::*;

// =============================================================
// Helpers
// =============================================================

fn with_document(id: &str) -> SummarizeState {
    let mut state = SummarizeState::default();
    state.observe_document(Some(id));
    state
}

fn dispatch(state: &mut SummarizeState) -> SummarizeTicket {
    match state.request() {
        SummarizeRequest::Dispatch(ticket) => ticket,
        other => panic!("expected dispatch, got {other:?}"),
    }
}

fn summary(text: &str) -> Result<SummarizeResponse, String> {
    Ok(SummarizeResponse { summary: text.to_owned() })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_enabled() {
    let state = SummarizeState::default();
    assert_eq!(state.view(), &SummaryView::Idle);
    assert_eq!(state.display_text(), None);
    assert!(!state.is_loading());
    assert!(!state.is_disabled());
    assert_eq!(state.last_error(), None);
}

// =============================================================
// Missing document
// =============================================================

#[test]
fn click_without_document_shows_upload_prompt_without_dispatch() {
    let mut state = SummarizeState::default();
    assert_eq!(state.request(), SummarizeRequest::MissingDocument);
    assert_eq!(state.display_text(), Some(NO_DOCUMENT_MESSAGE));
    assert!(!state.is_loading());
    assert_eq!(state.last_error(), None);
}

#[test]
fn blank_document_id_counts_as_missing() {
    let mut state = SummarizeState::default();
    assert!(!state.observe_document(Some("   ")));
    assert_eq!(state.document_id(), None);
    assert_eq!(state.request(), SummarizeRequest::MissingDocument);
}

#[test]
fn document_id_is_dispatched_verbatim() {
    let mut state = with_document(" doc-a ");
    assert_eq!(state.document_id(), Some(" doc-a "));
    assert_eq!(dispatch(&mut state).document_id, " doc-a ");
}

// =============================================================
// Dispatch and settle
// =============================================================

#[test]
fn click_with_document_dispatches_and_disables() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    assert_eq!(ticket.document_id, "doc-a");
    assert!(state.is_loading());
    assert!(state.is_disabled());
}

#[test]
fn success_displays_exact_summary_and_reenables() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    assert_eq!(state.settle(&ticket, summary("X")), SettleOutcome::Displayed);
    assert_eq!(state.display_text(), Some("X"));
    assert!(!state.is_disabled());
}

#[test]
fn success_preserves_whitespace_in_summary() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.settle(&ticket, summary("  line one\nline two  "));
    assert_eq!(state.display_text(), Some("  line one\nline two  "));
}

#[test]
fn failure_shows_fixed_message_and_records_detail() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    let outcome = state.settle(&ticket, Err("summarize failed: 500".to_owned()));
    assert_eq!(outcome, SettleOutcome::Failed);
    assert_eq!(state.display_text(), Some(FAILED_MESSAGE));
    assert_eq!(state.last_error(), Some("summarize failed: 500"));
    assert!(!state.is_disabled());
}

#[test]
fn failure_detail_never_reaches_display() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.settle(&ticket, Err("connection refused".to_owned()));
    assert!(!state.display_text().unwrap_or_default().contains("refused"));
}

#[test]
fn second_click_while_pending_is_ignored() {
    let mut state = with_document("doc-a");
    let mut dispatched = 0;
    for _ in 0..2 {
        if let SummarizeRequest::Dispatch(_) = state.request() {
            dispatched += 1;
        }
    }
    assert_eq!(dispatched, 1);
    assert_eq!(state.request(), SummarizeRequest::Busy);
}

#[test]
fn click_after_settle_dispatches_again() {
    let mut state = with_document("doc-a");
    let first = dispatch(&mut state);
    state.settle(&first, summary("one"));
    let second = dispatch(&mut state);
    assert_eq!(second.generation, first.generation);
    state.settle(&second, summary("two"));
    assert_eq!(state.display_text(), Some("two"));
}

// =============================================================
// Document changes
// =============================================================

#[test]
fn document_change_clears_displayed_summary() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.settle(&ticket, summary("about A"));
    assert!(state.observe_document(Some("doc-b")));
    assert_eq!(state.view(), &SummaryView::Idle);
    assert_eq!(state.document_id(), Some("doc-b"));
}

#[test]
fn document_change_clears_upload_prompt() {
    let mut state = SummarizeState::default();
    state.request();
    assert!(state.observe_document(Some("doc-a")));
    assert_eq!(state.display_text(), None);
}

#[test]
fn same_document_does_not_reset() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.settle(&ticket, summary("about A"));
    assert!(!state.observe_document(Some("doc-a")));
    assert_eq!(state.display_text(), Some("about A"));
}

#[test]
fn document_removed_resets_and_requires_upload() {
    let mut state = with_document("doc-a");
    assert!(state.observe_document(None));
    assert_eq!(state.request(), SummarizeRequest::MissingDocument);
}

#[test]
fn document_change_keeps_button_disabled_until_settle() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.observe_document(Some("doc-b"));
    assert!(state.is_disabled());
    assert_eq!(state.request(), SummarizeRequest::Busy);
    state.settle(&ticket, summary("about A"));
    assert!(!state.is_disabled());
}

#[test]
fn stale_success_is_discarded() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.observe_document(Some("doc-b"));
    assert_eq!(state.settle(&ticket, summary("about A")), SettleOutcome::Stale);
    assert_eq!(state.view(), &SummaryView::Idle);
}

#[test]
fn stale_failure_is_logged_but_not_displayed() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.observe_document(None);
    let outcome = state.settle(&ticket, Err("timeout".to_owned()));
    assert_eq!(outcome, SettleOutcome::Stale);
    assert_eq!(state.display_text(), None);
    assert_eq!(state.last_error(), Some("timeout"));
}

#[test]
fn switching_back_to_same_document_still_invalidates_old_ticket() {
    let mut state = with_document("doc-a");
    let ticket = dispatch(&mut state);
    state.observe_document(Some("doc-b"));
    state.observe_document(Some("doc-a"));
    assert_eq!(state.settle(&ticket, summary("about A")), SettleOutcome::Stale);
}
