//! Transaction Filters Entry Point

mod models;
mod error;
mod money;
mod filters;
mod extract;
mod predicate;
mod render;
mod url_sync;
mod summary;
mod config;
mod logger;
mod debounce;
mod page;
mod store;
mod context;
mod components;
mod app;

#[cfg(test)]
mod test_utils;

use app::App;
use config::FilterConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match FilterConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (FilterConfig::default(), Some(e)),
    };
    logger::init(config.log_level());
    if let Some(e) = config_error {
        log::error!("{}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
