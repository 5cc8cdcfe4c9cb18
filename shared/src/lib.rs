//! Resolution of the prediction API location for the Grape Scan front-end.
//!
//! One [`ConfigurationRecord`] is built from the profile selected at build time
//! and published once per process. Every consumer reads the same record.

pub mod models {
    pub mod config_record;
    pub mod deployment;
    pub mod endpoint;
}

pub mod error;
pub mod resolver;
pub mod url;

// Re-export commonly used items
pub use error::{ConfigError, Result};
pub use models::{
    config_record::ConfigurationRecord,
    deployment::{DeploymentTarget, Profile, SELECTED_TARGET},
    endpoint::{Endpoint, Endpoints},
};
pub use resolver::{
    publish, published, published_target, resolve, state, ConfigResolver, ResolverState,
};
pub use url::join_url;
