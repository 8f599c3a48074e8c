//! Configuration types for workload calculation.
//!
//! This module contains the file structures deserialized from the YAML
//! configuration files and the assembled [`EngineConfig`].

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{PayrollType, PayrollTypes, PoolType, SchoolYears, ThesisType};

/// Payroll types configuration file structure (`payroll_types.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollTypesConfig {
    /// All payroll types; order in the file is irrelevant.
    pub payroll_types: Vec<PayrollType>,
}

/// Pool types configuration file structure (`pool_types.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PoolTypesConfig {
    /// All pool types.
    pub pool_types: Vec<PoolType>,
}

/// Thesis types configuration file structure (`thesis_types.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ThesisTypesConfig {
    /// All thesis types.
    pub thesis_types: Vec<ThesisType>,
}

/// The complete configuration the engine calculates against.
///
/// School years are linked and payroll types are sorted into resolution
/// order when the configuration is assembled; neither changes afterwards.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    school_years: SchoolYears,
    payroll_types: PayrollTypes,
    pool_types: HashMap<String, PoolType>,
    thesis_types: HashMap<String, ThesisType>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// Fails if two payroll types share a code.
    pub fn new(
        school_years: SchoolYears,
        payroll_types: Vec<PayrollType>,
        pool_types: Vec<PoolType>,
        thesis_types: Vec<ThesisType>,
    ) -> EngineResult<Self> {
        Ok(Self {
            school_years,
            payroll_types: PayrollTypes::new(payroll_types)?,
            pool_types: pool_types
                .into_iter()
                .map(|t| (t.code.clone(), t))
                .collect(),
            thesis_types: thesis_types
                .into_iter()
                .map(|t| (t.code.clone(), t))
                .collect(),
        })
    }

    /// Returns the linked school years.
    pub fn school_years(&self) -> &SchoolYears {
        &self.school_years
    }

    /// Returns the payroll types in resolution order.
    pub fn payroll_types(&self) -> &PayrollTypes {
        &self.payroll_types
    }

    /// Returns all pool types by code.
    pub fn pool_types(&self) -> &HashMap<String, PoolType> {
        &self.pool_types
    }

    /// Returns all thesis types by code.
    pub fn thesis_types(&self) -> &HashMap<String, ThesisType> {
        &self.thesis_types
    }
}
