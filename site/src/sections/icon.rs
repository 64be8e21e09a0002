//! Remote icon image.

use leptos::prelude::*;

use crate::icons::{IconName, icon_url};

/// Renders an `<img>` pointing at the remote Tabler SVG for `name`.
///
/// When the CDN is unreachable the browser shows a broken image; nothing is
/// reported back to the caller.
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Phone class="icon icon-md" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to show
    name: IconName,
    /// CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! { <img src=icon_url(name) alt=name.alt_text() class=class /> }
}
