//! Page configuration.
//!
//! The browser build always uses [`SiteConfig::default`]. The export CLI can
//! load overrides from a TOML file:
//!
//! ```toml
//! title = "Kavárna U Kódu"
//! year = 2025
//! ```

use std::path::Path;

use chrono::Datelike;
use serde::Deserialize;

use crate::error::Result;
use crate::favicon::FAVICON_SVG;

/// Document title set on mount.
pub const DEFAULT_TITLE: &str = "Kavárna U Kódu - Nejlepší káva v Praze";

/// Settings that vary between builds of the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Browser tab title
    pub title: String,
    /// Copyright year in the footer; `None` means the current year
    pub year: Option<i32>,
    /// Raw SVG markup for the favicon
    pub favicon_svg: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            year: None,
            favicon_svg: FAVICON_SVG.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Year printed in the footer.
    pub fn footer_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Utc::now().year())
    }
}
