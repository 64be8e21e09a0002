use leptos::prelude::*;

use crate::content::{anchors, hero};

/// Full-height intro with the call-to-action button.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=anchors::HERO class="hero">
            <div class="hero-grid bg-grid-pattern"></div>
            <div class="hero-fade"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {hero::TITLE_LEAD}
                    <span class="accent">{hero::TITLE_ACCENT}</span>
                    "."
                </h1>
                <p class="hero-subtitle">{hero::SUBTITLE}</p>
                <a href=hero::CTA_HREF class="btn-gold">{hero::CTA_LABEL}</a>
            </div>
        </section>
    }
}
