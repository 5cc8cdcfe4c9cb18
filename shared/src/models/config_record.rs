use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::endpoint::{Endpoint, Endpoints};
use crate::url::join_url;

/// Where the front-end sends its API requests.
///
/// Serializes to the shape the browser side publishes:
/// `{ "API_URL": "...", "ENDPOINTS": { "PREDICT": "...", "HOME": "..." } }`.
/// Fields are private; once built a record can only be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[serde(rename = "API_URL")]
    api_base_url: String,
    #[serde(rename = "ENDPOINTS")]
    endpoints: Endpoints,
}

impl ConfigurationRecord {
    pub fn new(api_base_url: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            endpoints,
        }
    }

    /// Base URL of the backend, empty for same-origin deployments
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_same_origin(&self) -> bool {
        self.api_base_url.is_empty()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        self.endpoints.get(endpoint)
    }

    /// Full request target for a known endpoint
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        join_url(&self.api_base_url, self.endpoint(endpoint))
    }

    /// Full request target for any endpoint key, including extra ones
    pub fn url_for_key(&self, key: &str) -> Option<String> {
        self.endpoints
            .get_key(key)
            .map(|path| join_url(&self.api_base_url, path))
    }

    pub fn predict_url(&self) -> String {
        self.url_for(Endpoint::Predict)
    }

    pub fn home_url(&self) -> String {
        self.url_for(Endpoint::Home)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
