//! RetroQuest Frontend Entry Point

mod api;
mod app;
mod board_view;
mod components;
mod config;
mod context;
mod error;
mod format;
mod logger;
mod models;
mod pages;
mod routes;
mod session;
mod store;
mod validation;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    api::init(&config.api_base);
    log::info!(target: "app", "starting with api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
