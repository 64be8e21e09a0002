//! Error type shared by the page library.

use thiserror::Error;

/// Everything that can go wrong outside of plain rendering.
///
/// Rendering itself cannot fail. These errors come from the DOM during
/// document initialization or from loading config.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Not running in a browser
    #[error("no global `window` available")]
    NoWindow,

    /// Window without a document (e.g. a worker)
    #[error("window has no `document`")]
    NoDocument,

    /// Document without `<head>`, so no place for the icon link
    #[error("document has no <head> element")]
    NoHead,

    /// A `web_sys` call returned a JS exception
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Config TOML did not parse or had unknown keys
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for page operations.
pub type Result<T> = std::result::Result<T, SiteError>;
