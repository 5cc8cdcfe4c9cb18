use grape_scan_shared::{join_url, Endpoint};
use crate::config::Config;

/// Request target for an arbitrary API path
pub fn api_url(path: &str) -> String {
    join_url(Config::api_base_url(), path)
}

/// Request target for a named endpoint
pub fn endpoint_url(endpoint: Endpoint) -> String {
    Config::record().url_for(endpoint)
}

pub fn predict_url() -> String {
    endpoint_url(Endpoint::Predict)
}

pub fn home_url() -> String {
    endpoint_url(Endpoint::Home)
}
