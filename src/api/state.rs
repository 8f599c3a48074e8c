//! Application state for the Workload Calculation Engine API.

use std::sync::Arc;

use crate::calculation::WorkloadFactory;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration. Requests carry their own data snapshots,
/// so the state is read-only.
#[derive(Clone)]
pub struct AppState {
    /// The loaded workload configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a workload factory over the loaded configuration.
    pub fn factory(&self) -> WorkloadFactory<'_> {
        WorkloadFactory::new(self.config.config())
    }
}
