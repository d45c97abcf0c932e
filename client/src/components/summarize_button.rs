//! Summarize button with inline summary display.
//!
//! SYSTEM CONTEXT
//! ==============
//! Watches the parent's upload result, requests a summary for its document
//! reference on click, and renders the outcome. Lifecycle rules live in
//! `state::summarize`; this module only wires signals and the API call.

use leptos::prelude::*;

use crate::net::types::UploadResponse;
use crate::state::summarize::{SummarizeRequest, SummarizeState};

/// Button that summarizes the most recently uploaded document.
#[component]
pub fn SummarizeButton(
    /// Latest successful upload, if any.
    #[prop(into)]
    upload_success: Signal<Option<UploadResponse>>,
) -> impl IntoView {
    let state = RwSignal::new(SummarizeState::default());

    let document_id = Memo::new(move |_| {
        upload_success
            .get()
            .and_then(|upload| upload.document_id().map(str::to_owned))
    });

    Effect::new(move || {
        let id = document_id.get();
        state.update(|s| {
            s.observe_document(id.as_deref());
        });
    });

    let on_click = move |_| {
        let Some(SummarizeRequest::Dispatch(ticket)) = state.try_update(SummarizeState::request) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::summarize_document(&ticket.document_id).await;
            if let Err(e) = &result {
                log::error!("summarize failed for {}: {e}", ticket.document_id);
            }
            state.update(|s| {
                s.settle(&ticket, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    view! {
        <div class="text-center space-y-2">
            <button
                class="btn btn--outline bg-indigo-500 text-white hover:bg-indigo-600 transition duration-200"
                on:click=on_click
                disabled=move || state.with(SummarizeState::is_disabled)
            >
                "Summarize Document"
            </button>
            {move || {
                state
                    .with(|s| s.display_text().map(str::to_owned))
                    .map(|text| {
                        view! {
                            <div class="mt-4 bg-white p-4 rounded-md shadow text-left">
                                <h2 class="text-lg font-semibold mb-2">"Summary:"</h2>
                                <p class="text-gray-800 whitespace-pre-line">{text}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
