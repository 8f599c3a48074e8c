//! Thesis types and thesis supervision entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A kind of thesis and the percent one supervision counts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisType {
    /// Unique code of the thesis type.
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Percent of a full position per supervised thesis.
    pub percent_per_unit: Decimal,
}

/// The number of theses of one type a teacher supervises in a school year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThesisEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The supervising teacher.
    pub teacher_id: String,
    /// Code of the school year.
    pub school_year: String,
    /// Code of the thesis type.
    pub thesis_type: String,
    /// Number of supervised theses; may be fractional for shared supervision.
    pub count: Decimal,
}
