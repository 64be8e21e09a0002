//! # kavarna-site
//!
//! Landing page for Kavárna U Kódu, a café for developers in Prague, built
//! with [Leptos](https://leptos.dev/).
//!
//! The same component tree runs in two modes:
//!
//! - **csr** - mounted in the browser by the `landing` crate. The page shell
//!   sets the document title and installs a generated favicon on mount.
//! - **ssr** - pre-rendered to a static HTML file by [`render_page`] (used by
//!   `kavarna-export`), with title and favicon baked into `<head>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use kavarna_site::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static copy, navigation items, drinks, contacts
//! - [`menu`] - mobile menu open/closed state
//! - [`icons`] - icon names and remote image URLs
//! - [`favicon`] - title + favicon installation behind [`favicon::DocumentHead`]
//! - [`sections`] - Leptos components
//! - [`styles`] - CSS constants
//! - [`config`] - [`SiteConfig`]
//!
//! Developed with ☕ by the Kavárna U Kódu team

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod content;
#[cfg(feature = "csr")]
pub mod dom;
pub mod error;
pub mod favicon;
pub mod icons;
pub mod menu;
pub mod sections;
pub mod styles;

pub use config::SiteConfig;
pub use error::{Result, SiteError};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::SiteDocument;

/// Render the complete landing page as a static HTML document.
///
/// The output starts with `<!DOCTYPE html>` and needs no JavaScript: the
/// mobile menu stays closed, title and favicon are set in `<head>`.
pub fn render_page(config: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <SiteDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;
    use crate::favicon::{FAVICON_SVG, favicon_data_url};
    use crate::menu::MenuToggle;
    use crate::sections::{Header, MobileMenu};

    fn rendered() -> String {
        render_page(&SiteConfig {
            year: Some(2025),
            ..Default::default()
        })
    }

    /// Slice of `html` from the element carrying `class` to the next `</nav>`.
    fn nav_block<'a>(html: &'a str, class: &str) -> &'a str {
        let start = html
            .find(&format!("class=\"{}\"", class))
            .unwrap_or_else(|| panic!("no element with class {class}"));
        let end = html[start..].find("</nav>").expect("unclosed nav") + start;
        &html[start..end]
    }

    fn assert_nav_order(block: &str) {
        let positions: Vec<usize> = NAV_ITEMS
            .iter()
            .map(|item| {
                block
                    .find(&format!("href=\"{}\"", item.href))
                    .unwrap_or_else(|| panic!("missing link {}", item.href))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "links out of order");
        assert_eq!(block.matches("class=\"nav-link\"").count(), 3);
        for item in NAV_ITEMS {
            assert!(block.contains(item.label), "missing label {}", item.label);
        }
    }

    #[test]
    fn renders_full_document() {
        let html = rendered();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Kavárna U Kódu - Nejlepší káva v Praze"));
        assert!(html.contains(&favicon_data_url(FAVICON_SVG)));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = rendered();
        let order = [
            "class=\"site-header\"",
            "class=\"mobile-overlay",
            "id=\"hero\"",
            "id=\"o-nas\"",
            "id=\"nabidka\"",
            "id=\"kontakt\"",
            "class=\"site-footer\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn menu_starts_closed() {
        let html = rendered();

        assert!(html.contains("class=\"mobile-overlay translate-x-full\""));
        assert!(!html.contains("class=\"mobile-overlay translate-x-0\""));
        assert!(html.contains("icons/menu-2.svg"));
        assert!(!html.contains("icons/x.svg"));
        assert!(html.contains("aria-label=\"Toggle menu\""));
    }

    #[test]
    fn header_and_overlay_follow_menu_toggle() {
        Owner::new().with(|| {
            let menu = MenuToggle::new();
            menu.toggle();

            let html = view! { <Header menu=menu /><MobileMenu menu=menu /> }.to_html();
            assert!(html.contains("class=\"mobile-overlay translate-x-0\""));
            assert!(html.contains("icons/x.svg"));
            assert!(!html.contains("icons/menu-2.svg"));

            menu.close();
            let html = view! { <Header menu=menu /><MobileMenu menu=menu /> }.to_html();
            assert!(html.contains("class=\"mobile-overlay translate-x-full\""));
            assert!(html.contains("icons/menu-2.svg"));
            assert!(!html.contains("icons/x.svg"));
        });
    }

    #[test]
    fn desktop_nav_lists_three_links_in_order() {
        let html = rendered();
        assert_nav_order(nav_block(&html, "desktop-nav"));
    }

    #[test]
    fn mobile_nav_lists_three_links_in_order() {
        let html = rendered();
        assert_nav_order(nav_block(&html, "mobile-nav"));
    }

    #[test]
    fn renders_specialties_and_contacts() {
        let html = rendered();

        for drink in ["Debuggovací Doppio", "Algoritmické Americano", "Frontend Flat White"] {
            assert!(html.contains(drink), "missing {drink}");
        }
        assert!(html.contains("href=\"tel:+420777123456\""));
        assert!(html.contains("href=\"mailto:test@kavarna.cz\""));
        assert!(html.contains("Bugfixová 1"));
        assert!(html.contains("icons/map-pin.svg"));
        assert!(html.contains("alt=\"phone icon\""));
    }

    #[test]
    fn footer_uses_configured_year() {
        let html = rendered();
        assert!(html.contains("© 2025 Kavárna U Kódu. Všechna práva vyhrazena."));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn custom_title_reaches_head() {
        let html = render_page(&SiteConfig {
            title: "Zavřeno".into(),
            ..Default::default()
        });
        assert!(html.contains("<title>Zavřeno</title>"));
    }
}
