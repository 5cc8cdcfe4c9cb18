use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Unknown deployment target: {0}")]
    UnknownTarget(String),

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<JsonError> for ConfigError {
    fn from(error: JsonError) -> Self {
        Self::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::UnknownTarget("staging".to_string()).to_string(),
            "Unknown deployment target: staging"
        );
        assert_eq!(
            ConfigError::UnknownEndpoint("UPLOAD".to_string()).to_string(),
            "Unknown endpoint: UPLOAD"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }
}
