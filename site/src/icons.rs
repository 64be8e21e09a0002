//! Icon names and their remote image URLs.
//!
//! Icons come from the [Tabler Icons](https://tabler.io/icons) set served by
//! jsDelivr. Only the icons the page uses are listed, so a typo is a compile
//! error instead of a broken image.

use std::fmt;

/// Base URL of the Tabler icon set on jsDelivr (no trailing slash).
pub const ICON_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/@tabler/icons@latest/icons";

/// Icons used on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Hamburger shown while the mobile menu is closed
    Menu,
    /// Cross shown while the mobile menu is open
    Close,
    /// Address card
    MapPin,
    /// Telephone card
    Phone,
    /// Email card
    Mail,
}

impl IconName {
    /// Tabler file stem for this icon.
    pub const fn as_str(self) -> &'static str {
        match self {
            IconName::Menu => "menu-2",
            IconName::Close => "x",
            IconName::MapPin => "map-pin",
            IconName::Phone => "phone",
            IconName::Mail => "mail",
        }
    }

    /// Alt text for the rendered `<img>`.
    pub fn alt_text(self) -> String {
        format!("{} icon", self.as_str())
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote SVG URL for an icon.
pub fn icon_url(name: IconName) -> String {
    format!("{}/{}.svg", ICON_CDN_BASE, name.as_str())
}
