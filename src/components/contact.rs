use leptos::prelude::*;

use crate::booking::{self, BookingForm, PARTY_SIZES, TIME_SLOTS};
use crate::components::section_heading::SectionHeading;
use crate::data::{OPENING_HOURS, VENUE};
use crate::reveal::use_reveal;

/// Contact section: the table-booking form next to the venue details.
///
/// Submission never leaves the browser; an accepted request is logged,
/// acknowledged with a blocking alert, and the fields are cleared.
#[component]
pub fn Contact() -> impl IntoView {
    let (form, set_form) = signal(BookingForm::default());
    let (content, revealed) = use_reveal();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut accepted = None;
        set_form.update(|form| accepted = form.submit());
        let Some(request) = accepted else {
            // Native `required` validation keeps incomplete forms from
            // reaching here; an incomplete form stays untouched regardless.
            return;
        };

        match serde_json::to_string(&request) {
            Ok(json) => log::info!("booking request accepted: {}", json),
            Err(e) => log::warn!("booking request accepted, could not serialize: {}", e),
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(booking::CONFIRMATION_MESSAGE);
        }
    };

    view! {
        <section id="contact" class="section contact-section">
            <div
                node_ref=content
                class="container reveal"
                class:is-revealed=move || revealed.get()
            >
                <SectionHeading subtitle="Get in Touch" title="Contact & Reservations" />

                <div class="contact-grid">
                    <div class="contact-booking">
                        <h4 class="contact-heading">"Book a Table"</h4>
                        <p class="contact-note">
                            "Reserve your table online or call us directly. For parties of 8 or more, please contact us by phone to discuss your requirements."
                        </p>

                        <form on:submit=on_submit>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="booking-name">"Name"</label>
                                    <input
                                        id="booking-name"
                                        type="text"
                                        class="input"
                                        required
                                        prop:value=move || form.get().name
                                        on:input=move |ev| {
                                            set_form.update(|f| f.name = event_target_value(&ev));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="booking-email">"Email"</label>
                                    <input
                                        id="booking-email"
                                        type="email"
                                        class="input"
                                        required
                                        prop:value=move || form.get().email
                                        on:input=move |ev| {
                                            set_form.update(|f| f.email = event_target_value(&ev));
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="booking-phone">"Phone"</label>
                                    <input
                                        id="booking-phone"
                                        type="tel"
                                        class="input"
                                        required
                                        prop:value=move || form.get().phone
                                        on:input=move |ev| {
                                            set_form.update(|f| f.phone = event_target_value(&ev));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="booking-guests">"Number of Guests"</label>
                                    <select
                                        id="booking-guests"
                                        class="input"
                                        required
                                        prop:value=move || form.get().guests
                                        on:change=move |ev| {
                                            set_form.update(|f| f.guests = event_target_value(&ev));
                                        }
                                    >
                                        <option value="">"Select"</option>
                                        {PARTY_SIZES
                                            .iter()
                                            .map(|n| {
                                                view! {
                                                    <option value=n.to_string()>{n.to_string()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="booking-date">"Date"</label>
                                    <input
                                        id="booking-date"
                                        type="date"
                                        class="input"
                                        required
                                        prop:value=move || form.get().date
                                        on:input=move |ev| {
                                            set_form.update(|f| f.date = event_target_value(&ev));
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="booking-time">"Time"</label>
                                    <select
                                        id="booking-time"
                                        class="input"
                                        required
                                        prop:value=move || form.get().time
                                        on:change=move |ev| {
                                            set_form.update(|f| f.time = event_target_value(&ev));
                                        }
                                    >
                                        <option value="">"Select"</option>
                                        {TIME_SLOTS
                                            .iter()
                                            .map(|slot| {
                                                view! { <option value=*slot>{*slot}</option> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="booking-message">"Special Requests"</label>
                                <textarea
                                    id="booking-message"
                                    class="input"
                                    rows="4"
                                    prop:value=move || form.get().message
                                    on:input=move |ev| {
                                        set_form.update(|f| f.message = event_target_value(&ev));
                                    }
                                ></textarea>
                            </div>

                            <button type="submit" class="btn btn-primary btn-block">
                                "Book Now"
                            </button>
                        </form>
                    </div>

                    <div class="contact-details">
                        <h4 class="contact-heading">"Find Us"</h4>

                        <div class="detail-row">
                            <span class="detail-icon">"\u{1F4CD}"</span>
                            <div>
                                <h5 class="detail-label">"Address"</h5>
                                <p class="detail-text">{VENUE.address}</p>
                            </div>
                        </div>

                        <div class="detail-row">
                            <span class="detail-icon">"\u{260E}"</span>
                            <div>
                                <h5 class="detail-label">"Phone"</h5>
                                <p class="detail-text">{VENUE.phone}</p>
                            </div>
                        </div>

                        <div class="detail-row">
                            <span class="detail-icon">"\u{2709}"</span>
                            <div>
                                <h5 class="detail-label">"Email"</h5>
                                <p class="detail-text">{VENUE.email}</p>
                            </div>
                        </div>

                        <div class="detail-row">
                            <span class="detail-icon">"\u{1F550}"</span>
                            <div>
                                <h5 class="detail-label">"Opening Hours"</h5>
                                {OPENING_HOURS
                                    .iter()
                                    .map(|line| view! { <p class="detail-text">{*line}</p> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
