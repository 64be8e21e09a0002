use leptos::prelude::*;

/// Styled navigation anchor. `on_click` runs before the browser follows
/// the link; the mobile overlay uses it to close itself.
#[component]
pub fn NavLink(
    /// Link target
    href: &'static str,
    /// Extra click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Link text
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="nav-link"
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </a>
    }
}
