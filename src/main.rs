//! Catalog Admin Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod download;
mod error;
mod logger;
mod models;
mod service;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logger::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level);
    log::info!("Catalog admin starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
