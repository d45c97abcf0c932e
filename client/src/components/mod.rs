//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload, answer, and summarize surfaces. They receive
//! data as props from the page and keep only their own local state.

pub mod answer_panel;
pub mod document_upload;
pub mod summarize_button;
