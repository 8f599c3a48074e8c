//! Aggregated results of the course, pool, posting and thesis aggregators.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Semester, SemesterValue};

/// Lessons and percent booked on one payroll type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Code of the payroll type.
    pub payroll_type: String,
    /// Weekly lessons per semester.
    pub lessons: SemesterValue,
    /// Percent of a full position per semester.
    pub percent: SemesterValue,
}

/// Per-payroll-type totals, keyed by payroll type code.
///
/// # Example
///
/// ```
/// use workload_engine::models::{CategoryTotals, Semester};
/// use rust_decimal::Decimal;
///
/// let mut totals = CategoryTotals::default();
/// totals.add("teaching", Semester::First, Decimal::from(4), Decimal::from(14));
/// totals.add("teaching", Semester::First, Decimal::from(2), Decimal::from(7));
/// assert_eq!(totals.lessons("teaching").first, Decimal::from(6));
/// assert!(totals.get("admin").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, CategoryTotal>);

impl CategoryTotals {
    /// Adds lessons and percent for one semester to a payroll type.
    pub fn add(&mut self, payroll_type: &str, semester: Semester, lessons: Decimal, percent: Decimal) {
        let total = self.entry(payroll_type);
        total.lessons.add(semester, lessons);
        total.percent.add(semester, percent);
    }

    /// Adds lessons and percent for both semesters to a payroll type.
    pub fn add_values(&mut self, payroll_type: &str, lessons: SemesterValue, percent: SemesterValue) {
        let total = self.entry(payroll_type);
        total.lessons += lessons;
        total.percent += percent;
    }

    fn entry(&mut self, payroll_type: &str) -> &mut CategoryTotal {
        self.0
            .entry(payroll_type.to_string())
            .or_insert_with(|| CategoryTotal {
                payroll_type: payroll_type.to_string(),
                ..CategoryTotal::default()
            })
    }

    /// Returns the totals of a payroll type.
    pub fn get(&self, payroll_type: &str) -> Option<&CategoryTotal> {
        self.0.get(payroll_type)
    }

    /// Returns the lessons of a payroll type, zero if none were booked.
    pub fn lessons(&self, payroll_type: &str) -> SemesterValue {
        self.get(payroll_type)
            .map(|t| t.lessons)
            .unwrap_or_default()
    }

    /// Returns the percent of a payroll type, zero if none was booked.
    pub fn percent(&self, payroll_type: &str) -> SemesterValue {
        self.get(payroll_type)
            .map(|t| t.percent)
            .unwrap_or_default()
    }

    /// Returns the percent summed over all payroll types.
    pub fn total_percent(&self) -> SemesterValue {
        self.0.values().map(|t| t.percent).sum()
    }

    /// Iterates over the totals ordered by payroll type code.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.values()
    }

    /// Returns true if nothing was booked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A teacher's share of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    /// The course id.
    pub course_id: String,
    /// Code of the subject.
    pub subject: String,
    /// Code of the grade.
    pub grade: String,
    /// The payroll type the course is booked on.
    pub payroll_type: String,
    /// The teacher's lessons per semester.
    pub lessons: SemesterValue,
    /// The teacher's percent per semester.
    pub percent: SemesterValue,
}

/// Course aggregation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courses {
    /// One item per contributing course.
    pub items: Vec<CourseItem>,
    /// Totals per payroll type.
    pub totals: CategoryTotals,
}

/// One pool booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolItem {
    /// The pool entry id.
    pub entry_id: String,
    /// Code of the pool type.
    pub pool_type: String,
    /// Description of the booking.
    pub description: String,
    /// The payroll type the booking counts toward.
    pub payroll_type: String,
    /// Booked percent per semester.
    pub percent: SemesterValue,
}

/// Pool aggregation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// One item per booking.
    pub items: Vec<PoolItem>,
    /// Totals per payroll type (percent only).
    pub totals: CategoryTotals,
}

/// One payroll type line of a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDetailItem {
    /// Code of the payroll type.
    pub payroll_type: String,
    /// Weekly lessons; zero for percent-based payroll types.
    pub lessons: Decimal,
    /// Percent before age relief.
    pub percent_without_age_relief: Decimal,
    /// Age relief on top of the percent.
    pub age_relief: Decimal,
    /// Percent including age relief.
    pub percent_with_age_relief: Decimal,
}

/// One posting with its resolved detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingItem {
    /// The posting id.
    pub posting_id: String,
    /// Description of the posting.
    pub description: String,
    /// First day of the posting.
    pub start_date: NaiveDate,
    /// Last day of the posting, if bounded.
    pub end_date: Option<NaiveDate>,
    /// The semester the posting counts toward.
    pub semester: Semester,
    /// Resolved detail lines.
    pub details: Vec<PostingDetailItem>,
    /// Sum of the detail lines before age relief.
    pub percent_without_age_relief: Decimal,
    /// Sum of the detail lines including age relief.
    pub percent_with_age_relief: Decimal,
}

/// Posting aggregation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postings {
    /// One item per posting.
    pub items: Vec<PostingItem>,
    /// Unrelieved totals per payroll type.
    pub totals: CategoryTotals,
    /// Percent of all postings before age relief.
    pub percent_without_age_relief: SemesterValue,
    /// Percent of all postings including age relief.
    pub percent_with_age_relief: SemesterValue,
}

/// Supervised theses of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisItem {
    /// The thesis entry id.
    pub entry_id: String,
    /// Code of the thesis type.
    pub thesis_type: String,
    /// Description of the thesis type.
    pub description: String,
    /// Number of theses.
    pub count: Decimal,
    /// Percent per thesis.
    pub percent_each: Decimal,
    /// Percent for all theses of this entry.
    pub percent: Decimal,
}

/// Thesis aggregation result. Thesis percent applies to the whole year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theses {
    /// One item per thesis entry.
    pub items: Vec<ThesisItem>,
    /// Percent of all theses.
    pub total_percent: Decimal,
}
