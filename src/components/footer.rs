use leptos::prelude::*;

use crate::data::{OPENING_HOURS, VENUE};
use crate::reveal::use_reveal;

#[component]
pub fn Footer() -> impl IntoView {
    let (content, revealed) = use_reveal();
    let year = js_sys::Date::new_0().get_full_year();
    let (newsletter_email, set_newsletter_email) = signal(String::new());

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_newsletter_email.set(String::new());
    };

    view! {
        <footer class="footer">
            <div
                node_ref=content
                class="container reveal"
                class:is-revealed=move || revealed.get()
            >
                <div class="footer-grid">
                    <div class="footer-col">
                        <h4 class="footer-title">{VENUE.name}</h4>
                        <p class="footer-blurb">
                            "A modern gastropub with traditional values, serving exceptional food and drinks."
                        </p>
                        // Placeholder destinations; a bare "#" resolves to no
                        // element, so these clicks go nowhere by design.
                        <div class="footer-social">
                            <a href="#" class="social-link">"Facebook"</a>
                            <a href="#" class="social-link">"Instagram"</a>
                            <a href="#" class="social-link">"Twitter"</a>
                        </div>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-title">"Opening Hours"</h4>
                        <ul class="footer-list">
                            {OPENING_HOURS
                                .iter()
                                .map(|line| view! { <li>{*line}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-title">"Contact"</h4>
                        <ul class="footer-list">
                            <li>{VENUE.address}</li>
                            <li>{VENUE.phone}</li>
                            <li>{VENUE.email}</li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-title">"Newsletter"</h4>
                        <p class="footer-blurb">
                            "Subscribe to our newsletter for the latest updates and offers."
                        </p>
                        <form class="newsletter-form" on:submit=on_subscribe>
                            <input
                                type="email"
                                class="newsletter-input"
                                placeholder="Your email"
                                aria-label="Email address"
                                prop:value=move || newsletter_email.get()
                                on:input=move |ev| {
                                    set_newsletter_email.set(event_target_value(&ev));
                                }
                            />
                            <button type="submit" class="newsletter-button">"Subscribe"</button>
                        </form>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, VENUE.name)}</p>
                </div>
            </div>
        </footer>
    }
}
