//! Payroll resolution.
//!
//! Merges the course, pool and posting totals per payroll type, walking the
//! payroll types in their configured resolution order.

use crate::models::{
    AgeRelief, CalculationMode, Courses, Payroll, PayrollItem, PayrollTypes, Pool, Postings,
    SemesterValue,
};

/// Resolves the payroll breakdown.
///
/// Payroll types are processed in ascending `saldo_resolving_order`. For each
/// type, course lessons/percent, pool percent and posting lessons/percent
/// are combined into one [`PayrollItem`]; types without any contribution are
/// left out. Thesis percent belongs to no payroll type and is added by the
/// summary.
///
/// If the calculation mode includes age relief, the teacher's relief factor
/// is applied to each item's percent. Otherwise items are reported raw and
/// relief is applied once on the total by
/// [`build_summary`](super::build_summary). Lessons are never relief-adjusted.
pub fn resolve_payroll(
    courses: &Courses,
    pool: &Pool,
    postings: &Postings,
    payroll_types: &PayrollTypes,
    age_relief: &AgeRelief,
    mode: CalculationMode,
) -> Payroll {
    let mut items = Vec::new();

    for payroll_type in payroll_types.resolution_order() {
        let code = payroll_type.code.as_str();
        let lessons = courses.totals.lessons(code) + postings.totals.lessons(code);
        let percent = courses.totals.percent(code)
            + pool.totals.percent(code)
            + postings.totals.percent(code);

        if lessons.is_zero() && percent.is_zero() {
            continue;
        }

        let relief = if mode.includes_age_relief() {
            age_relief.relief(percent)
        } else {
            SemesterValue::ZERO
        };

        items.push(PayrollItem {
            payroll_type: payroll_type.code.clone(),
            description: payroll_type.description.clone(),
            lesson_based: payroll_type.lesson_based,
            lessons,
            percent_without_age_relief: percent,
            age_relief: relief,
            percent: percent + relief,
        });
    }

    Payroll { items }
}
