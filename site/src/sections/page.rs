//! Page shell: owns the menu state and runs the mount effect.

use leptos::prelude::*;

use super::{About, Contact, Footer, Header, Hero, MobileMenu, Offerings};
use crate::config::SiteConfig;
use crate::menu::MenuToggle;
use crate::styles::SITE_CSS;

/// The whole landing page below `<body>`.
#[component]
pub fn Page(
    /// Title, favicon and footer year; defaults when omitted
    #[prop(optional)]
    config: SiteConfig,
) -> impl IntoView {
    let menu = MenuToggle::new();
    let year = config.footer_year();

    // Title + favicon, once per page load. Reads no signals, so never reruns.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let initialized = crate::dom::BrowserHead::current()
            .and_then(|head| crate::favicon::initialize_document(&head, &config));
        if let Err(err) = initialized {
            tracing::warn!(%err, "document initialization failed");
        }
    });

    view! {
        <div class="page">
            <Header menu=menu />
            <MobileMenu menu=menu />
            <main>
                <Hero />
                <About />
                <Offerings />
                <Contact />
            </main>
            <Footer year=year />
            <style>{SITE_CSS}</style>
        </div>
    }
}
