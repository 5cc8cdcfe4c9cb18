use std::ops::Deref;
use grape_scan_shared::{ConfigurationRecord, Endpoint};
use yew::prelude::*;
use crate::config::Config;

/// Context value handed to components that build request targets.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfigContext {
    record: &'static ConfigurationRecord,
}

impl AppConfigContext {
    pub fn new(record: &'static ConfigurationRecord) -> Self {
        Self { record }
    }

    /// Context backed by the process-wide record
    pub fn published() -> Self {
        Self::new(Config::record())
    }

    pub fn record(&self) -> &'static ConfigurationRecord {
        self.record
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        self.record.url_for(endpoint)
    }
}

impl Deref for AppConfigContext {
    type Target = ConfigurationRecord;

    fn deref(&self) -> &Self::Target {
        self.record
    }
}

#[derive(Properties, PartialEq)]
pub struct AppConfigProviderProps {
    /// Overrides the published record, mainly for component tests
    #[prop_or_default]
    pub config: Option<AppConfigContext>,
    pub children: Children,
}

#[function_component(AppConfigProvider)]
pub fn app_config_provider(props: &AppConfigProviderProps) -> Html {
    let context = props.config.clone().unwrap_or_else(AppConfigContext::published);

    html! {
        <ContextProvider<AppConfigContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AppConfigContext>>
    }
}

/// Configuration from the nearest provider, or the published record
#[hook]
pub fn use_app_config() -> AppConfigContext {
    use_context::<AppConfigContext>().unwrap_or_else(AppConfigContext::published)
}
