//! Posting aggregation.
//!
//! A posting counts entirely toward the semester its start date falls in,
//! even if its end date reaches into the next semester.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AgeRelief, CategoryTotals, PayrollTypes, Posting, PostingDetailItem, PostingItem, Postings,
    SchoolYear, Semester, SemesterValue, WorkloadWarning,
};

use super::lessons_to_percent;

/// Returns the semester a posting starting on `start_date` counts toward.
///
/// # Examples
///
/// ```
/// use workload_engine::calculation::posting_semester;
/// use workload_engine::models::{CalculationMode, SchoolYear, Semester};
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let year = SchoolYear {
///     code: "2025".to_string(),
///     description: String::new(),
///     graduation_year: 2025,
///     weeks: 39,
///     calculation_mode: CalculationMode::Percent,
///     divisors: HashMap::new(),
///     archived: false,
///     finalised: false,
/// };
///
/// assert_eq!(posting_semester(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(), &year), Semester::First);
/// assert_eq!(posting_semester(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), &year), Semester::Second);
/// ```
pub fn posting_semester(start_date: NaiveDate, school_year: &SchoolYear) -> Semester {
    if start_date < school_year.semester_start(Semester::Second) {
        Semester::First
    } else {
        Semester::Second
    }
}

/// Aggregates a teacher's postings for a school year.
///
/// Each detail line on a lesson-based payroll type is converted from lessons
/// to percent; other lines use their stored percent. Age relief of the
/// posting's semester is computed per line for reporting; the category
/// totals stay unrelieved so the payroll resolver can apply relief once.
/// Lines with an unknown payroll type and postings of another school year
/// are skipped and reported.
pub fn aggregate_postings(
    teacher_id: &str,
    postings: &[Posting],
    school_year: &SchoolYear,
    payroll_types: &PayrollTypes,
    age_relief: &AgeRelief,
) -> (Postings, Vec<WorkloadWarning>) {
    let mut result = Postings::default();
    let mut warnings = Vec::new();

    for posting in postings.iter().filter(|p| p.teacher_id == teacher_id) {
        if posting.school_year != school_year.code {
            debug!(posting_id = %posting.id, posting_school_year = %posting.school_year, "Skipping posting of another school year");
            warnings.push(WorkloadWarning::new(
                "POSTING_WRONG_SCHOOL_YEAR",
                format!(
                    "Posting '{}' belongs to school year {}, not {}",
                    posting.id, posting.school_year, school_year.code
                ),
                "low",
            ));
            continue;
        }

        let semester = posting_semester(posting.start_date, school_year);
        let mut details = Vec::with_capacity(posting.details.len());

        for detail in &posting.details {
            let Some(payroll_type) = payroll_types.get(&detail.payroll_type) else {
                debug!(
                    posting_id = %posting.id,
                    payroll_type = %detail.payroll_type,
                    "Skipping posting detail of unknown payroll type"
                );
                warnings.push(WorkloadWarning::new(
                    "POSTING_DETAIL_SKIPPED",
                    format!(
                        "Posting '{}' has a detail line with unknown payroll type '{}'",
                        posting.id, detail.payroll_type
                    ),
                    "medium",
                ));
                continue;
            };

            let (lessons, percent) = if payroll_type.lesson_based {
                let lessons = detail.lessons.unwrap_or(Decimal::ZERO);
                (lessons, lessons_to_percent(&payroll_type.code, lessons, school_year))
            } else {
                (Decimal::ZERO, detail.percent.unwrap_or(Decimal::ZERO))
            };
            let relief = age_relief.relief_for(semester, percent);

            result.totals.add(&payroll_type.code, semester, lessons, percent);
            details.push(PostingDetailItem {
                payroll_type: payroll_type.code.clone(),
                lessons,
                percent_without_age_relief: percent,
                age_relief: relief,
                percent_with_age_relief: percent + relief,
            });
        }

        let without: Decimal = details.iter().map(|d| d.percent_without_age_relief).sum();
        let with: Decimal = details.iter().map(|d| d.percent_with_age_relief).sum();
        result.percent_without_age_relief += SemesterValue::only(semester, without);
        result.percent_with_age_relief += SemesterValue::only(semester, with);

        result.items.push(PostingItem {
            posting_id: posting.id.clone(),
            description: posting.description.clone(),
            start_date: posting.start_date,
            end_date: posting.end_date,
            semester,
            details,
            percent_without_age_relief: without,
            percent_with_age_relief: with,
        });
    }

    (result, warnings)
}
