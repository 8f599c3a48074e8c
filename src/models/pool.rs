//! Pool types and pool entries.
//!
//! Pool entries are percent bookings not tied to a course, such as
//! administrative duties.

use serde::{Deserialize, Serialize};

use super::SemesterValue;

/// A kind of pool booking and the payroll type it counts toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolType {
    /// Unique code of the pool type.
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// The payroll type pool percentages are booked on.
    pub payroll_type: String,
    /// Whether entries are copied when a schedule rolls over to the next year.
    #[serde(default)]
    pub auto_copy: bool,
}

/// A teacher's pool booking for a school year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The teacher the booking belongs to.
    pub teacher_id: String,
    /// Code of the school year.
    pub school_year: String,
    /// Code of the pool type.
    pub pool_type: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Booked percent per semester.
    #[serde(default)]
    pub percent: SemesterValue,
}
