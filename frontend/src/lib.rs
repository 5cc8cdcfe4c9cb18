use grape_scan_shared::ConfigurationRecord;
use gloo_utils::format::JsValueSerdeExt;
use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

pub mod api;
pub mod config;
pub mod provider;

pub use provider::{use_app_config, AppConfigContext, AppConfigProvider};

/// Resolves the configuration and publishes it on `window`.
///
/// Safe to call more than once: later calls see the record from the first.
pub fn init() -> Result<&'static ConfigurationRecord, JsValue> {
    let record = config::Config::record();
    config::publish_to_window(record)?;
    Ok(record)
}

/// Published configuration as a plain JS object
#[wasm_bindgen]
pub fn get_app_config() -> Result<JsValue, JsValue> {
    <JsValue as JsValueSerdeExt>::from_serde(config::Config::record())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize configuration: {}", e)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));
    console_error_panic_hook::set_once();

    info!("Resolving API configuration (target: {})", config::Config::target());
    init()?;
    Ok(())
}
