use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::data::{self, DEFAULT_CATEGORY, MENU_CATEGORIES};
use crate::reveal::use_reveal;

/// Menu browser: one tab per category, item grid for the active one.
#[component]
pub fn Menu() -> impl IntoView {
    let (active_category, set_active_category) = signal(DEFAULT_CATEGORY);
    let (content, revealed) = use_reveal();

    let tabs = MENU_CATEGORIES
        .iter()
        .map(|cat| {
            let id = cat.id;
            view! {
                <button
                    class="menu-tab"
                    class:active=move || active_category.get() == id
                    on:click=move |_| set_active_category.set(id)
                >
                    {cat.name}
                </button>
            }
        })
        .collect::<Vec<_>>();

    // Cards are recreated on every category switch, so their entrance
    // animation replays with a small per-item delay.
    let items = move || {
        data::category_items(active_category.get())
            .iter()
            .enumerate()
            .map(|(index, item)| {
                view! {
                    <div
                        class="menu-item-card"
                        style:animation-delay=format!("{}ms", index * 100)
                    >
                        <div class="menu-item-header">
                            <h4 class="menu-item-name">{item.name}</h4>
                            <span class="menu-item-price">{item.price}</span>
                        </div>
                        <p class="menu-item-description">{item.description}</p>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section id="menu" class="section menu-section">
            <div
                node_ref=content
                class="container reveal"
                class:is-revealed=move || revealed.get()
            >
                <SectionHeading subtitle="Culinary Delights" title="Our Menu" />

                <div class="menu-tabs">{tabs}</div>
                <div class="menu-grid">{items}</div>
            </div>
        </section>
    }
}
