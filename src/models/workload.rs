//! Workload calculation inputs and results.
//!
//! A [`Workload`] is a read-only value computed from one [`WorkloadInput`]
//! snapshot. Recomputing it from an unchanged snapshot yields an identical
//! value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    AgeRelief, CalculationMode, Course, Courses, Employment, Payroll, Pool, PoolEntry, Posting,
    Postings, Semester, Summary, Teacher, ThesisEntry, Theses,
};

/// Everything needed to calculate one teacher's workload for one school year.
///
/// The school year is taken from the employment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadInput {
    /// The teacher.
    pub teacher: Teacher,
    /// The teacher's employment for the school year.
    pub employment: Employment,
    /// Courses the teacher is assigned to.
    #[serde(default)]
    pub courses: Vec<Course>,
    /// The teacher's pool bookings.
    #[serde(default)]
    pub pool_entries: Vec<PoolEntry>,
    /// The teacher's postings.
    #[serde(default)]
    pub postings: Vec<Posting>,
    /// The teacher's thesis supervisions.
    #[serde(default)]
    pub theses: Vec<ThesisEntry>,
}

/// A record skipped during calculation, or another condition worth a look.
///
/// Warnings never stop a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl WorkloadWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The computed workload of one teacher for one school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// The teacher.
    pub teacher_id: String,
    /// The employment the workload was computed for.
    pub employment_id: String,
    /// Code of the school year.
    pub school_year: String,
    /// Division of the employment.
    pub division: String,
    /// The school year's calculation mode.
    pub calculation_mode: CalculationMode,
    /// Age relief factors of the teacher.
    pub age_relief: AgeRelief,
    /// Course aggregation.
    pub courses: Courses,
    /// Pool aggregation.
    pub pool: Pool,
    /// Posting aggregation.
    pub postings: Postings,
    /// Thesis aggregation.
    pub theses: Theses,
    /// Payroll breakdown.
    pub payroll: Payroll,
    /// Summary against the payment target.
    pub summary: Summary,
    /// Balance carried in from the previous school year.
    pub opening_balance: Decimal,
    /// Balance carried out into the next school year.
    pub closing_balance: Decimal,
    /// Records skipped and other findings.
    pub warnings: Vec<WorkloadWarning>,
}

impl Workload {
    /// Returns the course aggregation.
    pub fn courses(&self) -> &Courses {
        &self.courses
    }

    /// Returns the pool aggregation.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the posting aggregation.
    pub fn postings(&self) -> &Postings {
        &self.postings
    }

    /// Returns the thesis aggregation.
    pub fn theses(&self) -> &Theses {
        &self.theses
    }

    /// Returns the payroll breakdown.
    pub fn payroll(&self) -> &Payroll {
        &self.payroll
    }

    /// Returns the summary.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Returns the opening balance.
    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Returns the closing balance.
    pub fn closing_balance(&self) -> Decimal {
        self.closing_balance
    }

    /// Returns the change from opening to closing balance.
    pub fn balance_change(&self) -> Decimal {
        self.closing_balance - self.opening_balance
    }

    /// Returns the age relief factor of a semester, in percent.
    pub fn age_relief_factor(&self, semester: Semester) -> Decimal {
        self.age_relief.factor(semester)
    }

    /// Returns the age relief factor of semester 1.
    pub fn age_relief_factor1(&self) -> Decimal {
        self.age_relief_factor(Semester::First)
    }

    /// Returns the age relief factor of semester 2.
    pub fn age_relief_factor2(&self) -> Decimal {
        self.age_relief_factor(Semester::Second)
    }

    /// Returns the warnings raised during calculation.
    pub fn warnings(&self) -> &[WorkloadWarning] {
        &self.warnings
    }
}

/// The workloads of all teachers of a school year, optionally limited to a division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workloads {
    /// Code of the school year.
    pub school_year: String,
    /// The division filter, if any.
    pub division: Option<String>,
    /// One workload per teacher.
    pub workloads: Vec<Workload>,
    /// Sum of the yearly workload percentages.
    pub total_percent: Decimal,
    /// Sum of the yearly payment percentages.
    pub total_payment: Decimal,
    /// Sum of the balance changes.
    pub total_balance_change: Decimal,
}

impl Workloads {
    /// Returns the workload of a teacher.
    pub fn get(&self, teacher_id: &str) -> Option<&Workload> {
        self.workloads.iter().find(|w| w.teacher_id == teacher_id)
    }

    /// Returns the number of workloads.
    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    /// Returns true if no workloads were computed.
    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }
}
