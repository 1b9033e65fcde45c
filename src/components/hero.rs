use leptos::prelude::*;

use crate::reveal::use_reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let (content, revealed) = use_reveal();

    view! {
        <section id="home" class="hero">
            <div class="hero-overlay"></div>

            <div
                node_ref=content
                class="container hero-content reveal"
                class:is-revealed=move || revealed.get()
            >
                <h1 class="hero-title">"Welcome to Pub Crawl"</h1>
                <p class="hero-tagline">
                    "A modern gastropub with traditional values, serving exceptional food and drinks in a warm, inviting atmosphere."
                </p>
                <div class="hero-actions">
                    <a href="#menu" class="btn btn-primary">"View Our Menu"</a>
                    <a href="#contact" class="btn btn-outline">"Book a Table"</a>
                </div>
            </div>

            // Looping scroll cue; the animation is cosmetic and CSS-driven.
            <a href="#about" class="hero-scroll-cue" aria-label="Scroll to our story">
                "\u{2304}"
            </a>
        </section>
    }
}
