use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Logical endpoints the request layer knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    #[serde(rename = "PREDICT")]
    Predict,
    #[serde(rename = "HOME")]
    Home,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Predict, Endpoint::Home];

    /// Key used in the published `ENDPOINTS` object
    pub const fn key(self) -> &'static str {
        match self {
            Endpoint::Predict => "PREDICT",
            Endpoint::Home => "HOME",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PREDICT" => Ok(Endpoint::Predict),
            "HOME" => Ok(Endpoint::Home),
            _ => Err(ConfigError::UnknownEndpoint(s.to_string())),
        }
    }
}

/// Path suffixes keyed by endpoint name.
///
/// `PREDICT` and `HOME` are mandatory. Any other key is carried along so a
/// newer artifact can add endpoints without breaking older readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(rename = "PREDICT")]
    predict: String,
    #[serde(rename = "HOME")]
    home: String,
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

impl Endpoints {
    pub fn new(predict: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            predict: predict.into(),
            home: home.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds a key outside the known set. Only usable while building a record.
    pub fn with_extra(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.extra.insert(key.into(), path.into());
        self
    }

    pub fn get(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Predict => &self.predict,
            Endpoint::Home => &self.home,
        }
    }

    /// Looks up any key, known or extra. Keys match exactly.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        match Endpoint::ALL.into_iter().find(|e| e.key() == key) {
            Some(endpoint) => Some(self.get(endpoint)),
            None => self.extra.get(key).map(String::as_str),
        }
    }

    pub fn predict(&self) -> &str {
        &self.predict
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// All `(key, path)` pairs, known keys first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        Endpoint::ALL
            .into_iter()
            .map(move |e| (e.key(), self.get(e)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("PREDICT", Endpoint::Predict)]
    #[case("predict", Endpoint::Predict)]
    #[case(" Home ", Endpoint::Home)]
    fn test_endpoint_from_str(#[case] input: &str, #[case] expected: Endpoint) {
        assert_eq!(input.parse::<Endpoint>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_endpoint() {
        let err = "UPLOAD".parse::<Endpoint>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownEndpoint("UPLOAD".to_string()));
    }

    #[test]
    fn test_endpoint_key_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.key().parse::<Endpoint>().unwrap(), endpoint);
            assert_eq!(endpoint.to_string(), endpoint.key());
        }
    }

    #[test]
    fn test_endpoints_lookup() {
        let endpoints = Endpoints::new("/api/predict", "/").with_extra("HEALTH", "/api/health");

        assert_eq!(endpoints.get(Endpoint::Predict), "/api/predict");
        assert_eq!(endpoints.get(Endpoint::Home), "/");
        assert_eq!(endpoints.get_key("HEALTH"), Some("/api/health"));
        assert_eq!(endpoints.get_key("PREDICT"), Some("/api/predict"));
        assert_eq!(endpoints.get_key("MISSING"), None);
        assert_eq!(endpoints.get_key("predict"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive_for_extra_keys() {
        let value = json!({ "PREDICT": "/api/predict", "HOME": "/", "predict": "/v2/predict" });
        let endpoints: Endpoints = serde_json::from_value(value).unwrap();

        assert_eq!(endpoints.get_key("PREDICT"), Some("/api/predict"));
        assert_eq!(endpoints.get_key("predict"), Some("/v2/predict"));
    }

    #[test]
    fn test_endpoints_iter_lists_known_keys_first() {
        let endpoints = Endpoints::new("/api/predict", "/").with_extra("ABOUT", "/about");
        let pairs: Vec<_> = endpoints.iter().collect();
        assert_eq!(
            pairs,
            vec![("PREDICT", "/api/predict"), ("HOME", "/"), ("ABOUT", "/about")]
        );
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let value = json!({ "PREDICT": "/api/predict", "HOME": "/", "BATCH": "/api/batch" });
        let endpoints: Endpoints = serde_json::from_value(value).unwrap();

        assert_eq!(endpoints.predict(), "/api/predict");
        assert_eq!(endpoints.extra().get("BATCH").map(String::as_str), Some("/api/batch"));
    }

    #[test]
    fn test_missing_required_key_fails() {
        let value = json!({ "PREDICT": "/api/predict" });
        assert!(serde_json::from_value::<Endpoints>(value).is_err());
    }
}
