//! Configuration loading and management for the Workload Calculation Engine.
//!
//! This module loads school years, payroll types, pool types and thesis
//! types from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use workload_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} school years", config.config().school_years().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PayrollTypesConfig, PoolTypesConfig, ThesisTypesConfig};
