//! File picker and upload trigger.
//!
//! The parent owns the input's `NodeRef` so it can read the selected browser
//! `File` when the upload starts; this component only reports the selected
//! name and renders upload status.

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::types::UploadResponse;

/// Accepted upload extensions, passed to the file input's `accept` attribute.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.docx,.txt,.md,.csv";

/// Upload widget: file input, upload button, and success line.
#[component]
pub fn DocumentUpload(
    /// Name of the currently selected file.
    #[prop(into)]
    file_name: Signal<Option<String>>,
    /// Whether an upload is running.
    #[prop(into)]
    is_uploading: Signal<bool>,
    /// Latest successful upload.
    #[prop(into)]
    upload_success: Signal<Option<UploadResponse>>,
    /// Called with the selected file name whenever the selection changes.
    on_file_change: Callback<Option<String>>,
    /// Called when the user presses the upload button.
    on_upload: Callback<()>,
    /// File input handle, read by the parent when uploading.
    input_ref: NodeRef<Input>,
) -> impl IntoView {
    let on_change = move |_| {
        let name = input_ref.get_untracked().and_then(|input| selected_file_name(&input));
        on_file_change.run(name);
    };

    let can_upload = move || file_name.get().is_some() && !is_uploading.get();

    view! {
        <div class="document-upload space-y-2">
            <input
                class="document-upload__input"
                type="file"
                accept=ACCEPTED_FILE_TYPES
                node_ref=input_ref
                disabled=move || is_uploading.get()
                on:change=on_change
            />
            <button
                class="btn btn--primary document-upload__button"
                on:click=move |_| on_upload.run(())
                disabled=move || !can_upload()
            >
                {move || if is_uploading.get() { "Uploading..." } else { "Upload Document" }}
            </button>
            {move || {
                upload_success
                    .get()
                    .map(|upload| {
                        view! {
                            <p class="document-upload__success">{upload_summary_line(&upload)}</p>
                        }
                    })
            }}
        </div>
    }
}

/// One-line description of a completed upload.
#[must_use]
pub fn upload_summary_line(upload: &UploadResponse) -> String {
    let noun = if upload.chunks == 1 { "chunk" } else { "chunks" };
    format!("Uploaded {} ({}) in {} {noun}", upload.file, upload.filetype, upload.chunks)
}

#[cfg(feature = "hydrate")]
fn selected_file_name(input: &web_sys::HtmlInputElement) -> Option<String> {
    input.files().and_then(|files| files.get(0)).map(|file| file.name())
}

#[cfg(not(feature = "hydrate"))]
fn selected_file_name<T>(_input: &T) -> Option<String> {
    None
}
