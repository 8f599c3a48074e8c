//! Ad-hoc postings and their per-payroll-type detail lines.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A date-ranged adjustment to a teacher's workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Unique identifier for the posting.
    pub id: String,
    /// The teacher the posting belongs to.
    pub teacher_id: String,
    /// Code of the school year.
    pub school_year: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// First day of the posting; decides the semester.
    pub start_date: NaiveDate,
    /// Last day of the posting, if bounded.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Detail lines, one per payroll type.
    #[serde(default)]
    pub details: Vec<PostingDetail>,
}

/// One payroll type's share of a posting.
///
/// Lesson-based payroll types read `lessons`; all others read `percent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingDetail {
    /// Code of the payroll type.
    pub payroll_type: String,
    /// Weekly lessons, for lesson-based payroll types.
    #[serde(default)]
    pub lessons: Option<Decimal>,
    /// Percent of a full position, for percent-based payroll types.
    #[serde(default)]
    pub percent: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_posting_with_details() {
        let json = r#"{
            "id": "po_001",
            "teacher_id": "t_001",
            "school_year": "2025",
            "description": "Substitution",
            "start_date": "2024-09-02",
            "details": [
                {"payroll_type": "teaching", "lessons": "2"},
                {"payroll_type": "admin", "percent": "1.5"}
            ]
        }"#;
        let posting: Posting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.start_date, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        assert!(posting.end_date.is_none());
        assert_eq!(posting.details.len(), 2);
        assert_eq!(posting.details[0].lessons, Some(Decimal::from(2)));
        assert_eq!(posting.details[1].percent, Some(Decimal::new(15, 1)));
    }
}
