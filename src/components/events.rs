use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::data::EVENTS;
use crate::reveal::use_reveal;

#[component]
pub fn Events() -> impl IntoView {
    let (content, revealed) = use_reveal();

    let cards = EVENTS
        .iter()
        .enumerate()
        .map(|(index, event)| {
            view! {
                <div
                    class="event-card stagger"
                    style:transition-delay=format!("{}ms", index * 200)
                >
                    <span class="event-icon">{event.icon.glyph()}</span>
                    <div class="event-body">
                        <h4 class="event-title">{event.title}</h4>
                        <p class="event-schedule">{event.schedule}</p>
                        <p class="event-description">{event.description}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="events" class="section events-section">
            <div class="events-overlay"></div>

            <div
                node_ref=content
                class="container events-content reveal"
                class:is-revealed=move || revealed.get()
            >
                <SectionHeading subtitle="Join Us" title="Upcoming Events" />

                <div class="events-grid">{cards}</div>

                <div class="events-cta stagger" style:transition-delay="800ms">
                    <a href="#contact" class="btn btn-primary">"Book an Event"</a>
                </div>
            </div>
        </section>
    }
}
