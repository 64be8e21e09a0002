use leptos::prelude::*;

use crate::content::{about, anchors};

/// "Příběh naší kavárny" section.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=anchors::ABOUT class="section section-charcoal">
            <div class="container section-head">
                <h2 class="section-title">{about::TITLE}</h2>
                <div class="divider"></div>
                <p class="about-body">{about::BODY}</p>
            </div>
        </section>
    }
}
