//! Document assistant page: upload, ask, summarize.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns `DocumentAssistantState` and runs the upload, ask, and memory-reset
//! calls. `SummarizeButton` is fed the latest upload and manages its own
//! request lifecycle.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::answer_panel::AnswerPanel;
use crate::components::document_upload::DocumentUpload;
use crate::components::summarize_button::SummarizeButton;
use crate::state::assistant::DocumentAssistantState;

#[component]
pub fn AssistantPage() -> impl IntoView {
    let state = RwSignal::new(DocumentAssistantState::new(uuid::Uuid::new_v4().to_string()));
    let file_input = NodeRef::<Input>::new();

    let file_name = Signal::derive(move || state.with(|s| s.file_name.clone()));
    let is_uploading = Signal::derive(move || state.with(|s| s.is_uploading));
    let upload_success = Signal::derive(move || state.with(|s| s.upload_success.clone()));
    let response = Signal::derive(move || state.with(|s| s.response.clone()));

    let on_file_change = Callback::new(move |name: Option<String>| {
        state.update(|s| s.select_file(name));
    });

    let on_upload = Callback::new(move |()| {
        if !state.try_update(DocumentAssistantState::begin_upload).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                state.update(|s| s.finish_upload(Err("no file selected".to_owned())));
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_document(&file).await;
                match &result {
                    Ok(upload) => log::info!("uploaded {} ({} chunks)", upload.file, upload.chunks),
                    Err(e) => log::error!("upload failed: {e}"),
                }
                state.update(|s| s.finish_upload(result));
            });
        }
    });

    let on_ask = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(question) = state.try_update(DocumentAssistantState::begin_ask).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let session_id = state.with_untracked(|s| s.session_id.clone());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::ask_question(&question, &session_id).await;
                if let Err(e) = &result {
                    log::error!("question answering failed: {e}");
                }
                state.update(|s| s.finish_ask(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = question;
    };

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session_id = state.with_untracked(|s| s.session_id.clone());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::reset_memory(&session_id).await;
                if let Err(e) = &result {
                    log::warn!("memory reset failed: {e}");
                }
                state.update(|s| s.clear_conversation(result));
            });
        }
    };

    view! {
        <main class="assistant-page max-w-3xl mx-auto p-6 space-y-6">
            <header class="assistant-page__header">
                <h1 class="text-2xl font-bold">"Document Intelligence Assistant"</h1>
                <p class="text-gray-600">"Upload a document, then ask questions or request a summary."</p>
            </header>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|error| view! { <div class="assistant-page__error" role="alert">{error}</div> })
            }}

            <DocumentUpload
                file_name=file_name
                is_uploading=is_uploading
                upload_success=upload_success
                on_file_change=on_file_change
                on_upload=on_upload
                input_ref=file_input
            />

            <SummarizeButton upload_success=upload_success/>

            <form class="assistant-page__ask space-y-2" on:submit=on_ask>
                <input
                    class="assistant-page__question"
                    type="text"
                    placeholder="Ask a question about your document..."
                    disabled=move || state.with(|s| s.is_asking)
                    prop:value=move || state.with(|s| s.question.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.question = value);
                    }
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !state.with(DocumentAssistantState::can_ask)
                >
                    {move || if state.with(|s| s.is_asking) { "Thinking..." } else { "Ask" }}
                </button>
                <button class="btn btn--outline" type="button" on:click=on_clear>
                    "Clear conversation"
                </button>
            </form>

            <AnswerPanel response=response/>
        </main>
    }
}
