//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the workload
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollType, PoolType, SchoolYear, SchoolYears, ThesisType};

use super::types::{EngineConfig, PayrollTypesConfig, PoolTypesConfig, ThesisTypesConfig};

/// Loads and provides access to the workload configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── payroll_types.yaml   # Payroll categories and resolution order
/// ├── pool_types.yaml      # Pool booking kinds
/// ├── thesis_types.yaml    # Thesis supervision kinds
/// └── school_years/
///     └── 2025.yaml        # One file per school year
/// ```
///
/// # Example
///
/// ```no_run
/// use workload_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let year = loader.school_year("2025").unwrap();
/// println!("Divisor for teaching: {:?}", year.divisor("teaching"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing
    /// ([`EngineError::ConfigNotFound`]), contains invalid YAML
    /// ([`EngineError::ConfigParseError`]), or if two school year files
    /// declare the same code.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll_types =
            Self::load_yaml::<PayrollTypesConfig>(&path.join("payroll_types.yaml"))?;
        let pool_types = Self::load_yaml::<PoolTypesConfig>(&path.join("pool_types.yaml"))?;
        let thesis_types = Self::load_yaml::<ThesisTypesConfig>(&path.join("thesis_types.yaml"))?;

        let school_years = Self::load_school_years(&path.join("school_years"))?;

        let config = EngineConfig::new(
            SchoolYears::new(school_years)?,
            payroll_types.payroll_types,
            pool_types.pool_types,
            thesis_types.thesis_types,
        )?;

        Ok(Self { config })
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all school year files from the school years directory.
    fn load_school_years(dir: &Path) -> EngineResult<Vec<SchoolYear>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                years.push(Self::load_yaml::<SchoolYear>(&path)?);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no school year files found)", dir_str),
            });
        }

        Ok(years)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets a school year by its code.
    ///
    /// Returns [`EngineError::SchoolYearNotFound`] for an unknown code.
    pub fn school_year(&self, code: &str) -> EngineResult<&SchoolYear> {
        self.config
            .school_years()
            .get(code)
            .ok_or_else(|| EngineError::SchoolYearNotFound {
                code: code.to_string(),
            })
    }

    /// Gets a payroll type by its code.
    pub fn payroll_type(&self, code: &str) -> Option<&PayrollType> {
        self.config.payroll_types().get(code)
    }

    /// Gets a pool type by its code.
    pub fn pool_type(&self, code: &str) -> Option<&PoolType> {
        self.config.pool_types().get(code)
    }

    /// Gets a thesis type by its code.
    pub fn thesis_type(&self, code: &str) -> Option<&ThesisType> {
        self.config.thesis_types().get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationMode, Semester};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_school_years_are_linked() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let years = loader.config().school_years();

        assert_eq!(years.len(), 3);
        assert_eq!(years.next("2025").unwrap().code, "2026");
        assert_eq!(years.previous("2026").unwrap().code, "2025");
        assert!(years.next("2027").is_none());
        assert!(years.previous("2025").is_none());
    }

    #[test]
    fn test_school_year_divisors_and_mode() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let year = loader.school_year("2025").unwrap();

        assert_eq!(year.divisor("teaching"), Some(dec("28")));
        assert_eq!(year.divisor("admin"), None);
        assert_eq!(year.calculation_mode, CalculationMode::LessonsAgeReliefIncluded);
        assert_eq!(
            year.semester_start(Semester::Second),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_unknown_school_year() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        match loader.school_year("1999") {
            Err(EngineError::SchoolYearNotFound { code }) => assert_eq!(code, "1999"),
            other => panic!("Expected SchoolYearNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_payroll_types_in_resolution_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let order: Vec<&str> = loader
            .config()
            .payroll_types()
            .resolution_order()
            .iter()
            .map(|t| t.code.as_str())
            .collect();

        assert_eq!(order, vec!["teaching", "class", "admin"]);
        assert!(loader.payroll_type("teaching").unwrap().lesson_based);
        assert!(!loader.payroll_type("admin").unwrap().lesson_based);
    }

    #[test]
    fn test_pool_and_thesis_types_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.pool_type("library").unwrap().payroll_type, "admin");
        assert_eq!(
            loader.thesis_type("matura").unwrap().percent_per_unit,
            dec("0.5")
        );
        assert!(loader.thesis_type("unknown").is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll_types.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
