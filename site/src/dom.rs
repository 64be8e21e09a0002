//! Browser implementation of [`DocumentHead`] on top of `web_sys`.

use std::fmt::Debug;

use web_sys::{Document, Element};

use crate::error::{Result, SiteError};
use crate::favicon::{DocumentHead, ICON_LINK_SELECTOR};

fn dom_err(err: impl Debug) -> SiteError {
    SiteError::Dom(format!("{:?}", err))
}

/// The live page document.
pub struct BrowserHead {
    document: Document,
}

impl BrowserHead {
    /// Wrap an existing document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the global `window`.
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl DocumentHead for BrowserHead {
    type Link = Element;

    fn set_title(&self, title: &str) -> Result<()> {
        self.document.set_title(title);
        Ok(())
    }

    fn find_icon_link(&self) -> Result<Option<Element>> {
        self.document
            .query_selector(ICON_LINK_SELECTOR)
            .map_err(dom_err)
    }

    fn create_icon_link(&self) -> Result<Element> {
        let link = self.document.create_element("link").map_err(dom_err)?;
        link.set_attribute("rel", "icon").map_err(dom_err)?;
        let head = self.document.head().ok_or(SiteError::NoHead)?;
        head.append_child(&link).map_err(dom_err)?;
        Ok(link)
    }

    fn set_link_href(&self, link: &Element, href: &str) -> Result<()> {
        link.set_attribute("href", href).map_err(dom_err)
    }
}
