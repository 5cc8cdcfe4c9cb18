use gloo_utils::format::JsValueSerdeExt;
use grape_scan_shared::{published_target, ConfigurationRecord, DeploymentTarget, SELECTED_TARGET};
use js_sys::{Object, Reflect};
use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};

/// Property on `window` that carries the published configuration
pub const GLOBAL_NAME: &str = "APP_CONFIG";

pub struct Config;

impl Config {
    /// The process-wide record, resolved on first use
    pub fn record() -> &'static ConfigurationRecord {
        grape_scan_shared::resolve()
    }

    pub fn api_base_url() -> &'static str {
        // Empty means same origin: the host proxies /api/ to the backend
        Self::record().api_base_url()
    }

    pub fn target() -> DeploymentTarget {
        published_target().unwrap_or(SELECTED_TARGET)
    }
}

/// Publishes `record` as a frozen, read-only `window.APP_CONFIG`.
///
/// The property is defined non-writable and non-configurable. If it already
/// exists nothing is changed.
pub fn publish_to_window(record: &ConfigurationRecord) -> Result<(), JsValue> {
    let window = gloo_utils::window();
    let key = JsValue::from_str(GLOBAL_NAME);

    if Reflect::has(window.as_ref(), &key)? {
        warn!("window.{} is already defined, leaving it untouched", GLOBAL_NAME);
        return Ok(());
    }

    let value = <JsValue as JsValueSerdeExt>::from_serde(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize configuration: {}", e)))?;
    let endpoints: Object = Reflect::get(&value, &JsValue::from_str("ENDPOINTS"))?.dyn_into()?;
    Object::freeze(&endpoints);
    let config: Object = value.dyn_into()?;
    let frozen = Object::freeze(&config);

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("value"), &frozen)?;
    Reflect::set(&descriptor, &JsValue::from_str("enumerable"), &JsValue::TRUE)?;
    Object::define_property(&window, &key, &descriptor);

    info!("Published window.{} (API_URL: '{}')", GLOBAL_NAME, record.api_base_url());
    Ok(())
}

/// Reads `window.APP_CONFIG` back into a record.
pub fn read_from_window() -> Result<ConfigurationRecord, JsValue> {
    let window = gloo_utils::window();
    let value = Reflect::get(window.as_ref(), &JsValue::from_str(GLOBAL_NAME))?;
    if value.is_undefined() || value.is_null() {
        return Err(JsValue::from_str(&format!("window.{} is not published", GLOBAL_NAME)));
    }

    debug!("Reading window.{}", GLOBAL_NAME);
    JsValueSerdeExt::into_serde::<ConfigurationRecord>(&value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse window.{}: {}", GLOBAL_NAME, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_reads_published_record() {
        let record = Config::record();
        assert_eq!(Config::api_base_url(), record.api_base_url());
        assert!(std::ptr::eq(record, Config::record()));
        assert_eq!(Config::target(), SELECTED_TARGET);
    }
}
