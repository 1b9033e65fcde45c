mod app;
mod booking;
mod components;
mod data;
mod reveal;
mod scroll;
mod theme;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    leptos::mount::mount_to_body(App);
}
