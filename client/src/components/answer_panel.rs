//! Answer display with supporting sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the latest `QueryResponse`: the answer as sanitized markdown, then
//! each evidential snippet with its confidence.

use leptos::prelude::*;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::net::types::{QueryResponse, Source};

/// Latest answer and its sources; renders nothing until there is an answer.
#[component]
pub fn AnswerPanel(
    /// Latest answer, if any.
    #[prop(into)]
    response: Signal<Option<QueryResponse>>,
) -> impl IntoView {
    move || {
        response.get().map(|resp| {
            let rendered = render_markdown_html(&resp.answer);
            let has_sources = !resp.sources.is_empty();
            let items = resp.sources.into_iter().map(source_item).collect::<Vec<_>>();
            view! {
                <section class="answer-panel mt-4 bg-white p-4 rounded-md shadow text-left">
                    <h2 class="text-lg font-semibold mb-2">"Answer:"</h2>
                    <div class="answer-panel__markdown" inner_html=rendered></div>
                    {has_sources
                        .then(|| view! { <h3 class="answer-panel__sources-title">"Sources"</h3> })}
                    <ul class="answer-panel__sources">{items}</ul>
                </section>
            }
        })
    }
}

fn source_item(source: Source) -> impl IntoView {
    let label = confidence_label(&source);
    let text = source.text;
    view! {
        <li class="answer-panel__source">
            <span class="answer-panel__confidence">{label}</span>
            <p class="answer-panel__snippet whitespace-pre-line">{text}</p>
        </li>
    }
}

/// Badge text for a source's confidence.
#[must_use]
pub fn confidence_label(source: &Source) -> String {
    format!("{}% confidence", source.confidence_percent())
}

/// Link schemes allowed through to rendered `href`/`src` attributes.
const SAFE_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Whether a link or image target is relative or uses an allowed scheme.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim_start();
    let scheme_end = url.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(idx) if url[idx..].starts_with(':') => {
            let scheme = &url[..idx];
            SAFE_URL_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe))
        }
        _ => true,
    }
}

/// Render model output as HTML for `inner_html`.
///
/// Raw HTML is dropped, and link/image targets outside [`is_safe_url`] are
/// replaced so no script URL reaches the page.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
