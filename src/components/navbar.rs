use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::data::NAV_LINKS;
use crate::scroll;

/// Fixed page header.
///
/// Transparent over the hero, solid once the page scrolls past the
/// threshold. On narrow screens the links collapse behind a toggle button;
/// activating a link closes the menu again (the shell's click interceptor
/// performs the actual scroll).
#[component]
pub fn Navbar() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll::is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li class="nav-item">
                    <a href=link.href class="nav-link">{link.label}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="navbar" class:navbar-scrolled=move || scrolled.get()>
            <div class="container navbar-inner">
                <a href="#home" class="navbar-brand">"Pub Crawl"</a>

                <nav class="navbar-desktop">
                    <ul class="nav-list">{desktop_links}</ul>
                </nav>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="navbar-mobile">
                    <ul class="mobile-nav-list">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li class="mobile-nav-item">
                                        <a
                                            href=link.href
                                            class="nav-link"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
            </Show>
        </header>
    }
}
