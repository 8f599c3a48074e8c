//! Error types for the Workload Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors cover configuration problems and caller mistakes only; inconsistent
//! assignment data never fails a calculation and is reported as a
//! [`WorkloadWarning`](crate::models::WorkloadWarning) instead.

use thiserror::Error;

/// The main error type for the Workload Calculation Engine.
///
/// # Example
///
/// ```
/// use workload_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two school years share the same code.
    #[error("Duplicate school year: {code}")]
    DuplicateSchoolYear {
        /// The duplicated school year code.
        code: String,
    },

    /// Two payroll types share the same code.
    #[error("Duplicate payroll type: {code}")]
    DuplicatePayrollType {
        /// The duplicated payroll type code.
        code: String,
    },

    /// School year code was not found in the configuration.
    #[error("School year not found: {code}")]
    SchoolYearNotFound {
        /// The school year code that was not found.
        code: String,
    },

    /// More than one employment exists for a teacher in one school year.
    #[error("Duplicate employment for teacher '{teacher_id}' in school year {school_year}")]
    DuplicateEmployment {
        /// The teacher the employments belong to.
        teacher_id: String,
        /// The school year code.
        school_year: String,
    },

    /// No employment exists for a teacher in a school year.
    #[error("No employment for teacher '{teacher_id}' in school year {school_year}")]
    EmploymentNotFound {
        /// The teacher that was looked up.
        teacher_id: String,
        /// The school year code.
        school_year: String,
    },

    /// A semester number other than 1 or 2 was supplied.
    #[error("Invalid semester: {value} (expected 1 or 2)")]
    InvalidSemester {
        /// The rejected semester number.
        value: u8,
    },

    /// Input data was invalid or inconsistent.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
