//! Conversion between weekly lessons and percent of a full position.
//!
//! The divisor (weekly lessons of a full position) is configured per school
//! year and payroll type. A missing divisor converts to zero, and so does a
//! value too large to represent.

use rust_decimal::Decimal;

use crate::models::SchoolYear;

/// Converts weekly lessons of a payroll type to percent of a full position.
///
/// Returns zero if the school year has no positive divisor for the payroll type.
///
/// # Examples
///
/// ```
/// use workload_engine::calculation::lessons_to_percent;
/// use workload_engine::models::{CalculationMode, SchoolYear};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let year = SchoolYear {
///     code: "2025".to_string(),
///     description: String::new(),
///     graduation_year: 2025,
///     weeks: 39,
///     calculation_mode: CalculationMode::Lessons,
///     divisors: HashMap::from([("teaching".to_string(), Decimal::from(25))]),
///     archived: false,
///     finalised: false,
/// };
///
/// assert_eq!(lessons_to_percent("teaching", Decimal::from(5), &year), Decimal::from(20));
/// assert_eq!(lessons_to_percent("admin", Decimal::from(5), &year), Decimal::ZERO);
/// ```
pub fn lessons_to_percent(payroll_type: &str, lessons: Decimal, school_year: &SchoolYear) -> Decimal {
    match school_year.divisor(payroll_type) {
        Some(divisor) => lessons
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(divisor))
            .unwrap_or(Decimal::ZERO),
        None => Decimal::ZERO,
    }
}

/// Converts percent of a full position to weekly lessons of a payroll type.
///
/// The inverse of [`lessons_to_percent`]; returns zero under the same
/// missing-divisor condition.
pub fn percent_to_lessons(payroll_type: &str, percent: Decimal, school_year: &SchoolYear) -> Decimal {
    match school_year.divisor(payroll_type) {
        Some(divisor) => percent
            .checked_mul(divisor)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO),
        None => Decimal::ZERO,
    }
}

/// Converts a count (e.g. supervised theses) to percent using a fixed per-unit percentage.
pub fn count_to_percent(count: Decimal, percent_per_unit: Decimal) -> Decimal {
    count.checked_mul(percent_per_unit).unwrap_or(Decimal::ZERO)
}
