use app::App;
use lectern_core::Config;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

const SITE_CONFIG: &str = include_str!("../../lectern.toml");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which then receives this warning.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Console logger not installed: {err}");
    }

    let config = match Config::from_toml_str(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid lectern.toml, using defaults: {err}");
            Config::default()
        }
    };

    mount_to_body(move || view! { <App config=config /> });
}
