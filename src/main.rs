//! Group Admin Frontend Entry Point

mod models;
mod logger;
mod api;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = context::load_config();
    logger::init(config.log_level);
    log::info!("[APP] starting, backend at {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config /> });
}
