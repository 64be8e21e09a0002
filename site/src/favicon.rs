//! Document title and generated favicon.
//!
//! The favicon is a small inline SVG turned into a base64 `data:` URL, so
//! the page needs no icon file. Installing it is a find-or-create upsert on
//! the `<link rel="icon">` element: the first matching link is reused,
//! otherwise one is appended to `<head>`.
//!
//! DOM access goes through [`DocumentHead`] so the upsert can be tested
//! without a browser. The browser implementation is in `crate::dom`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::Result;

/// 32x32 dark tile with two gold chevrons (`< >`).
pub const FAVICON_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg"><rect width="32" height="32" rx="6" fill="#1A1A1A"/><path d="M11 11L7 16L11 21" stroke="#D4AF37" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M21 11L25 16L21 21" stroke="#D4AF37" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// CSS selector matching any link whose `rel` contains the `icon` token.
pub const ICON_LINK_SELECTOR: &str = "link[rel~='icon']";

const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Encode SVG markup as a `data:image/svg+xml;base64,...` URL.
pub fn favicon_data_url(svg: &str) -> String {
    format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(svg.as_bytes()))
}

/// The parts of a document the page shell touches on mount.
pub trait DocumentHead {
    /// Handle to a `<link>` element.
    type Link;

    /// Set `document.title`.
    fn set_title(&self, title: &str) -> Result<()>;

    /// First element matching [`ICON_LINK_SELECTOR`], if any.
    fn find_icon_link(&self) -> Result<Option<Self::Link>>;

    /// Create a `<link rel="icon">` and append it to `<head>`.
    fn create_icon_link(&self) -> Result<Self::Link>;

    /// Point `link` at `href`.
    fn set_link_href(&self, link: &Self::Link, href: &str) -> Result<()>;
}

/// What [`install_favicon`] did with the icon link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaviconInstall {
    /// No icon link existed; one was appended to `<head>`
    Created,
    /// An existing icon link got the new `href`
    Reused,
}

/// Point the document's icon link at `href`, creating the link if needed.
///
/// Calling this repeatedly leaves exactly one link managed by it, holding
/// the most recent `href`.
pub fn install_favicon<H: DocumentHead>(head: &H, href: &str) -> Result<FaviconInstall> {
    let (link, outcome) = match head.find_icon_link()? {
        Some(link) => (link, FaviconInstall::Reused),
        None => (head.create_icon_link()?, FaviconInstall::Created),
    };
    head.set_link_href(&link, href)?;
    debug!(?outcome, "favicon installed");
    Ok(outcome)
}

/// One-time mount effect: set the title, then install the favicon.
pub fn initialize_document<H: DocumentHead>(head: &H, config: &SiteConfig) -> Result<()> {
    head.set_title(&config.title)?;
    install_favicon(head, &favicon_data_url(&config.favicon_svg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeLink {
        rel: String,
        href: Option<String>,
    }

    /// In-memory `<head>`: a title and a list of `<link>` elements.
    #[derive(Default)]
    struct FakeHead {
        title: RefCell<String>,
        links: RefCell<Vec<FakeLink>>,
    }

    impl FakeHead {
        fn with_link(rel: &str, href: &str) -> Self {
            let head = Self::default();
            head.links.borrow_mut().push(FakeLink {
                rel: rel.to_string(),
                href: Some(href.to_string()),
            });
            head
        }

        fn icon_links(&self) -> Vec<FakeLink> {
            self.links
                .borrow()
                .iter()
                .filter(|l| l.rel.split_whitespace().any(|t| t == "icon"))
                .cloned()
                .collect()
        }
    }

    impl DocumentHead for FakeHead {
        type Link = usize;

        fn set_title(&self, title: &str) -> Result<()> {
            *self.title.borrow_mut() = title.to_string();
            Ok(())
        }

        fn find_icon_link(&self) -> Result<Option<usize>> {
            Ok(self
                .links
                .borrow()
                .iter()
                .position(|l| l.rel.split_whitespace().any(|t| t == "icon")))
        }

        fn create_icon_link(&self) -> Result<usize> {
            let mut links = self.links.borrow_mut();
            links.push(FakeLink {
                rel: "icon".into(),
                href: None,
            });
            Ok(links.len() - 1)
        }

        fn set_link_href(&self, link: &usize, href: &str) -> Result<()> {
            self.links.borrow_mut()[*link].href = Some(href.to_string());
            Ok(())
        }
    }

    #[test]
    fn data_url_is_base64_svg() {
        let url = favicon_data_url("<svg/>");
        assert_eq!(url, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn creates_link_when_missing() {
        let head = FakeHead::default();
        let outcome = install_favicon(&head, "data:one").unwrap();

        assert_eq!(outcome, FaviconInstall::Created);
        assert_eq!(
            head.icon_links(),
            vec![FakeLink {
                rel: "icon".into(),
                href: Some("data:one".into())
            }]
        );
    }

    #[test]
    fn second_install_reuses_single_link() {
        let head = FakeHead::default();
        install_favicon(&head, "data:first").unwrap();
        let outcome = install_favicon(&head, "data:second").unwrap();

        assert_eq!(outcome, FaviconInstall::Reused);
        let links = head.icon_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href.as_deref(), Some("data:second"));
    }

    #[test]
    fn reuses_existing_shortcut_icon() {
        let head = FakeHead::with_link("shortcut icon", "/favicon.ico");
        install_favicon(&head, "data:new").unwrap();

        let links = head.icon_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, "shortcut icon");
        assert_eq!(links[0].href.as_deref(), Some("data:new"));
    }

    #[test]
    fn ignores_non_icon_links() {
        let head = FakeHead::with_link("stylesheet", "/site.css");
        assert_eq!(install_favicon(&head, "data:x").unwrap(), FaviconInstall::Created);
        assert_eq!(head.links.borrow().len(), 2);
    }

    #[test]
    fn initialize_sets_title_and_favicon() {
        let head = FakeHead::default();
        let config = SiteConfig::default();
        initialize_document(&head, &config).unwrap();
        initialize_document(&head, &config).unwrap();

        assert_eq!(*head.title.borrow(), "Kavárna U Kódu - Nejlepší káva v Praze");
        let links = head.icon_links();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].href.as_deref(),
            Some(favicon_data_url(FAVICON_SVG).as_str())
        );
    }
}
