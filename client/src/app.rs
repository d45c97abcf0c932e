//! Root layout: HTML shell, metadata, font, stylesheet, and theme tokens.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Style, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::assistant::AssistantPage;
use crate::theme::THEME;

/// Page title and description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Document Intelligence Assistant",
    description: "Upload documents and ask intelligent questions about their content",
};

/// Inter, latin subset.
pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap&subset=latin";

/// Class applied to `<body>` so every page inherits the font.
pub const FONT_CLASS: &str = "font-inter";

/// Global stylesheet emitted by the CSS build.
pub const GLOBAL_STYLESHEET: &str = "/pkg/document-assistant.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class=FONT_CLASS>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href=GLOBAL_STYLESHEET/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Stylesheet id="font-inter" href=FONT_STYLESHEET/>
        <Style id="theme-tokens">{THEME.css_variables()}</Style>
        <Title text={SITE_METADATA.title}/>
        <Meta name="description" content={SITE_METADATA.description}/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AssistantPage/>
            </Routes>
        </Router>
    }
}
