//! Full HTML document around the page, for pre-rendering.

use leptos::prelude::*;

use super::Page;
use crate::config::SiteConfig;
use crate::favicon::favicon_data_url;
use crate::styles::{CSP, FONT_STYLESHEET_URL};

/// `<html>` root with title and favicon already in `<head>`.
///
/// The browser build sets both at runtime instead; a static file has no
/// script to do it.
#[component]
pub fn SiteDocument(
    /// Forwarded to [`Page`]
    config: SiteConfig,
) -> impl IntoView {
    let favicon = favicon_data_url(&config.favicon_svg);
    let title = config.title.clone();

    view! {
        <html lang="cs">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <link rel="icon" href=favicon />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONT_STYLESHEET_URL />
            </head>
            <body>
                <Page config=config />
            </body>
        </html>
    }
}
