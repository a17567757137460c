//! Campus Portal Frontend Entry Point

mod models;
mod error;
mod config;
mod context;
mod storage;
mod store;
mod auth;
mod menu;
mod todo;
mod login;
mod viewport;
mod components;
mod pages;
mod app;

use app::App;
use auth::JsAuthenticator;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    console_logger::init(console_logger::parse_level(&config.log_level));
    if let Some(e) = config_error {
        log::warn!("ignoring host page config: {}", e);
    }
    log::info!("campus portal starting");

    let auth = JsAuthenticator::shared();
    mount_to_body(move || view! { <App config=config auth=auth /> });
}
