use leptos::prelude::*;

use crate::content::{SPECIALTIES, Specialty, anchors, offerings};

/// "Naše Speciality" - the drinks grid.
#[component]
pub fn Offerings() -> impl IntoView {
    view! {
        <section id=anchors::OFFERINGS class="section section-black">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-title">{offerings::TITLE}</h2>
                    <p class="section-intro">{offerings::INTRO}</p>
                </div>
                <div class="card-grid">
                    {SPECIALTIES.into_iter().map(|specialty| view! {
                        <SpecialtyCard specialty=specialty />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SpecialtyCard(specialty: Specialty) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">{specialty.name}</h3>
            <p class="card-text">{specialty.description}</p>
        </div>
    }
}
