//! Leptos components that make up the page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (pre-render only)
//! └── Page
//!     ├── Header
//!     │   ├── NavLink x3 (desktop)
//!     │   └── Icon (menu toggle)
//!     ├── MobileMenu
//!     │   └── NavLink x3 (closes the menu)
//!     ├── main
//!     │   ├── Hero
//!     │   ├── About
//!     │   ├── Offerings
//!     │   └── Contact
//!     │       └── Icon x3
//!     └── Footer
//! ```
//!
//! Only `Page` holds state; every section below it is a pure function of
//! [`crate::content`].

mod about;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icon;
mod nav_link;
mod offerings;
mod page;

pub use about::About;
pub use contact::Contact;
pub use document::SiteDocument;
pub use footer::Footer;
pub use header::{Header, MobileMenu};
pub use hero::Hero;
pub use icon::Icon;
pub use nav_link::NavLink;
pub use offerings::Offerings;
pub use page::Page;
