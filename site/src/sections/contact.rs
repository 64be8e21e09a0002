use leptos::prelude::*;

use super::Icon;
use crate::content::{CONTACTS, ContactEntry, ContactValue, anchors, contact};

/// Address, phone and email cards.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=anchors::CONTACT class="section section-charcoal">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-title">{contact::TITLE}</h2>
                    <p class="section-intro">{contact::INTRO}</p>
                </div>
                <div class="contact-grid">
                    {CONTACTS.into_iter().map(|entry| view! {
                        <ContactCard entry=entry />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(entry: ContactEntry) -> impl IntoView {
    let value = match entry.value {
        ContactValue::Lines(lines) => view! {
            <p class="contact-value">
                {lines.iter().map(|line| view! {
                    <span class="contact-line">{*line}</span>
                }).collect::<Vec<_>>()}
            </p>
        }
        .into_any(),
        ContactValue::Link { href, label } => view! {
            <a href=href class="contact-value">{label}</a>
        }
        .into_any(),
    };

    view! {
        <div class="contact-item">
            <Icon name=entry.icon class="icon icon-md" />
            <h3 class="contact-title">{entry.title}</h3>
            {value}
        </div>
    }
}
