use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::reveal::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let (content, revealed) = use_reveal();

    view! {
        <section id="about" class="section about-section">
            <div
                node_ref=content
                class="container reveal"
                class:is-revealed=move || revealed.get()
            >
                <SectionHeading subtitle="Our Story" title="About Pub Crawl" />

                <div class="about-grid">
                    <div class="about-copy">
                        <p>
                            "Established in 2010, Croft House has become a beloved fixture in the community, known for its exceptional food, carefully curated drinks selection, and warm, inviting atmosphere."
                        </p>
                        <p>
                            "Our head chef brings over 20 years of culinary expertise to create dishes that celebrate local, seasonal ingredients while honoring traditional cooking methods."
                        </p>
                        <p>
                            "Whether you're joining us for a casual lunch, an intimate dinner, or a special celebration, we strive to make every visit to Pub Crawl memorable."
                        </p>
                    </div>

                    <div class="about-collage stagger" style:transition-delay="200ms">
                        <img
                            class="about-photo"
                            src="https://images.unsplash.com/photo-1414235077428-338989a2e8c0?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80"
                            alt="Croft House interior"
                        />
                        <img
                            class="about-photo about-photo-inset"
                            src="https://images.unsplash.com/photo-1600565193348-f74bd3c7ccdf?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80"
                            alt="Chef preparing food"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
