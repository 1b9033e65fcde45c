use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::events::Events;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::menu::Menu;
use crate::components::navbar::Navbar;
use crate::scroll;
use crate::theme::{apply_theme, THEME};

#[component]
pub fn App() -> impl IntoView {
    // Push the design tokens onto the document root on mount
    Effect::new(move |_| {
        apply_theme(&THEME);
    });

    // Single interceptor for every in-page anchor: clicks bubble up here
    // from all sections, and the handler is removed with this element on
    // unmount. A fragment that resolves to no element leaves the click
    // prevented and does nothing else.
    let intercept_anchor = move |ev: leptos::ev::MouseEvent| {
        let Some(target) = ev.target() else {
            return;
        };
        let Some(element) = target.dyn_ref::<web_sys::Element>() else {
            return;
        };
        if element.tag_name() != "A" {
            return;
        }
        let Some(href) = element.get_attribute("href") else {
            return;
        };
        let Some(id) = scroll::fragment_target(&href) else {
            return;
        };
        ev.prevent_default();
        scroll::scroll_to_fragment(id);
    };

    view! {
        <div class="site" on:click=intercept_anchor>
            <Navbar />
            <main>
                <Hero />
                <About />
                <Menu />
                <Events />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
