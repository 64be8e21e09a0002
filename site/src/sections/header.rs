use leptos::prelude::*;

use super::{Icon, NavLink};
use crate::content::{BRAND, BRAND_ACCENT, NAV_ITEMS};
use crate::menu::MenuToggle;

/// Fixed top bar: brand, desktop navigation and the mobile menu button.
///
/// The button icon follows the menu state.
#[component]
pub fn Header(
    /// Shared with [`MobileMenu`]
    menu: MenuToggle,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="brand">
                    {BRAND}" "<span class="accent">{BRAND_ACCENT}</span>
                </a>
                <nav class="desktop-nav">
                    {NAV_ITEMS.into_iter().map(|item| view! {
                        <NavLink href=item.href>{item.label}</NavLink>
                    }).collect::<Vec<_>>()}
                </nav>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.toggle()
                >
                    {move || view! {
                        <Icon name=menu.state().toggle_icon() class="icon icon-lg" />
                    }}
                </button>
            </div>
        </header>
    }
}

/// Full-screen navigation for narrow viewports. Slides in from the right
/// while the menu is open; any link click closes it.
#[component]
pub fn MobileMenu(
    /// Shared with [`Header`]
    menu: MenuToggle,
) -> impl IntoView {
    let close = Callback::new(move |()| menu.close());

    view! {
        <div class=move || menu.state().overlay_class()>
            <div class="mobile-overlay-inner">
                <nav class="mobile-nav">
                    {NAV_ITEMS.into_iter().map(|item| view! {
                        <NavLink href=item.href on_click=close>{item.label}</NavLink>
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </div>
    }
}
