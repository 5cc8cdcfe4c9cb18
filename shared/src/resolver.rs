use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use crate::models::config_record::ConfigurationRecord;
use crate::models::deployment::{DeploymentTarget, SELECTED_TARGET};
use crate::models::endpoint::Endpoints;

struct Published {
    target: DeploymentTarget,
    record: ConfigurationRecord,
}

static APP_CONFIG: OnceCell<Published> = OnceCell::new();

/// Lifecycle of the process-wide record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Unresolved,
    Resolved,
}

/// Builds the record for one deployment target.
///
/// This is a pure mapping from profile literals to a [`ConfigurationRecord`];
/// it never touches the published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigResolver {
    target: DeploymentTarget,
}

impl ConfigResolver {
    pub fn new(target: DeploymentTarget) -> Self {
        Self { target }
    }

    /// Resolver for the target chosen at build time
    pub fn selected() -> Self {
        Self::new(SELECTED_TARGET)
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    pub fn resolve(&self) -> ConfigurationRecord {
        let profile = self.target.profile();
        ConfigurationRecord::new(
            profile.api_base_url,
            Endpoints::new(profile.predict, profile.home),
        )
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::selected()
    }
}

/// Returns the process-wide record, resolving it on first use.
pub fn resolve() -> &'static ConfigurationRecord {
    publish(SELECTED_TARGET)
}

/// Publishes the record for `target` unless one is already published.
///
/// The first publication wins for the rest of the process. Later calls get the
/// existing record back; a request for a different target is logged and
/// ignored.
pub fn publish(target: DeploymentTarget) -> &'static ConfigurationRecord {
    let mut fresh = false;
    let published = APP_CONFIG.get_or_init(|| {
        fresh = true;
        let record = ConfigResolver::new(target).resolve();
        info!(
            "Resolved API configuration for target '{}': base URL '{}'",
            target,
            record.api_base_url()
        );
        Published { target, record }
    });

    if !fresh {
        if published.target != target {
            warn!(
                "Ignoring request to publish target '{}': '{}' is already published",
                target, published.target
            );
        } else {
            debug!("API configuration already published for '{}'", target);
        }
    }

    &published.record
}

/// The published record, without resolving
pub fn published() -> Option<&'static ConfigurationRecord> {
    APP_CONFIG.get().map(|p| &p.record)
}

/// Target of the published record, if any
pub fn published_target() -> Option<DeploymentTarget> {
    APP_CONFIG.get().map(|p| p.target)
}

pub fn state() -> ResolverState {
    if APP_CONFIG.get().is_some() {
        ResolverState::Resolved
    } else {
        ResolverState::Unresolved
    }
}
