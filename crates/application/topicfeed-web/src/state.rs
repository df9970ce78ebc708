//! Application state shared by every handler

use std::sync::Arc;
use topicfeed_catalog::{JsonCatalog, StaticCatalog};
use topicfeed_config::Config;
use topicfeed_core::{Catalog, EventLog, TracingLog};
use tracing::info;

/// Read-only for the lifetime of the server
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn Catalog>,
    pub log: Arc<dyn EventLog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn Catalog>, log: Arc<dyn EventLog>) -> Self {
        Self { config, catalog, log }
    }

    /// State for `config`: the catalog file if one is configured, otherwise
    /// the built-in demo data, logging through `tracing`
    pub fn load(config: Config) -> topicfeed_core::Result<Self> {
        let catalog = open_catalog(&config)?;
        Ok(Self::new(config, catalog, Arc::new(TracingLog)))
    }
}

/// The dataset selected by `config`
pub fn open_catalog(config: &Config) -> topicfeed_core::Result<Arc<dyn Catalog>> {
    match &config.catalog_path {
        Some(path) => Ok(Arc::new(JsonCatalog::load(path)?)),
        None => {
            info!("Using built-in demo catalog");
            Ok(Arc::new(StaticCatalog::demo()))
        }
    }
}
