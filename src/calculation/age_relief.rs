//! Age relief calculation.
//!
//! Older teachers are granted a percentage uplift on their workload. The
//! teacher's age is taken on the day before each semester starts.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Age, AgeRelief, SchoolYear, Semester, SemesterValue, Teacher};

/// Age relief bands as (minimum age, relief percent), highest first.
const RELIEF_BANDS: [(u32, i64); 3] = [(58, 12), (54, 8), (50, 4)];

/// Returns a teacher's age in whole years on the reference date.
///
/// One year is subtracted if the birthday has not yet occurred in the
/// reference year. A missing birthday, or one after the reference date,
/// gives [`Age::Unknown`].
///
/// # Examples
///
/// ```
/// use workload_engine::calculation::age_on;
/// use workload_engine::models::Age;
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(1975, 8, 1).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
/// assert_eq!(age_on(Some(birthday), day_before), Age::Known(49));
/// assert_eq!(age_on(None, day_before), Age::Unknown);
/// ```
pub fn age_on(birthday: Option<NaiveDate>, reference: NaiveDate) -> Age {
    let Some(birthday) = birthday else {
        return Age::Unknown;
    };
    if birthday > reference {
        return Age::Unknown;
    }

    let mut years = reference.year() - birthday.year();
    if (reference.month(), reference.day()) < (birthday.month(), birthday.day()) {
        years -= 1;
    }
    u32::try_from(years).map(Age::Known).unwrap_or(Age::Unknown)
}

/// Returns the relief percentage for an age.
///
/// Below 50: 0 %. 50 to 53: 4 %. 54 to 57: 8 %. 58 and older: 12 %.
/// An unknown age gets no relief.
///
/// # Examples
///
/// ```
/// use workload_engine::calculation::relief_factor;
/// use workload_engine::models::Age;
/// use rust_decimal::Decimal;
///
/// assert_eq!(relief_factor(Age::Known(49)), Decimal::ZERO);
/// assert_eq!(relief_factor(Age::Known(54)), Decimal::from(8));
/// assert_eq!(relief_factor(Age::Unknown), Decimal::ZERO);
/// ```
pub fn relief_factor(age: Age) -> Decimal {
    let Age::Known(age) = age else {
        return Decimal::ZERO;
    };
    RELIEF_BANDS
        .iter()
        .find(|(min_age, _)| age >= *min_age)
        .map(|(_, percent)| Decimal::from(*percent))
        .unwrap_or(Decimal::ZERO)
}

/// Computes a teacher's ages and relief factors for both semesters of a school year.
pub fn age_relief_for(teacher: &Teacher, school_year: &SchoolYear) -> AgeRelief {
    let first = age_on(teacher.birthday, school_year.semester_cutoff(Semester::First));
    let second = age_on(teacher.birthday, school_year.semester_cutoff(Semester::Second));
    AgeRelief {
        ages: [first, second],
        factor: SemesterValue::new(relief_factor(first), relief_factor(second)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalculationMode;
    use std::collections::HashMap;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn school_year(graduation_year: i32) -> SchoolYear {
        SchoolYear {
            code: graduation_year.to_string(),
            description: String::new(),
            graduation_year,
            weeks: 39,
            calculation_mode: CalculationMode::Percent,
            divisors: HashMap::new(),
            archived: false,
            finalised: false,
        }
    }

    fn teacher(birthday: Option<NaiveDate>) -> Teacher {
        Teacher {
            id: "t_001".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Meier".to_string(),
            birthday,
        }
    }

    #[test]
    fn test_relief_bands() {
        let cases = [
            (49, 0),
            (50, 4),
            (53, 4),
            (54, 8),
            (57, 8),
            (58, 12),
            (120, 12),
        ];
        for (age, expected) in cases {
            assert_eq!(
                relief_factor(Age::Known(age)),
                Decimal::from(expected),
                "age {}",
                age
            );
        }
    }

    #[test]
    fn test_relief_for_young_and_unknown() {
        assert_eq!(relief_factor(Age::Known(0)), Decimal::ZERO);
        assert_eq!(relief_factor(Age::Unknown), Decimal::ZERO);
    }

    #[test]
    fn test_age_on_birthday_counts_full_year() {
        let birthday = date(1975, 3, 15);
        assert_eq!(age_on(Some(birthday), date(2025, 3, 15)), Age::Known(50));
        assert_eq!(age_on(Some(birthday), date(2025, 3, 14)), Age::Known(49));
    }

    #[test]
    fn test_age_on_leap_day_birthday() {
        let birthday = date(1976, 2, 29);
        assert_eq!(age_on(Some(birthday), date(2026, 2, 28)), Age::Known(49));
        assert_eq!(age_on(Some(birthday), date(2026, 3, 1)), Age::Known(50));
    }

    #[test]
    fn test_age_on_birthday_after_reference_is_unknown() {
        assert_eq!(age_on(Some(date(2030, 1, 1)), date(2025, 1, 1)), Age::Unknown);
    }

    #[test]
    fn test_age_relief_uses_day_before_semester_start() {
        // Turns 50 on August 1, 2025: still 49 on the semester 1 cutoff (July 31).
        let relief = age_relief_for(&teacher(Some(date(1975, 8, 1))), &school_year(2026));
        assert_eq!(relief.age(Semester::First), Age::Known(49));
        assert_eq!(relief.age(Semester::Second), Age::Known(50));
        assert_eq!(relief.factor(Semester::First), Decimal::ZERO);
        assert_eq!(relief.factor(Semester::Second), Decimal::from(4));
    }

    #[test]
    fn test_age_relief_birthday_on_cutoff() {
        // Turns 54 on January 31, 2026: the semester 2 cutoff itself.
        let relief = age_relief_for(&teacher(Some(date(1972, 1, 31))), &school_year(2026));
        assert_eq!(relief.age(Semester::Second), Age::Known(54));
        assert_eq!(relief.factor(Semester::Second), Decimal::from(8));
    }

    #[test]
    fn test_age_relief_without_birthday() {
        let relief = age_relief_for(&teacher(None), &school_year(2026));
        assert_eq!(relief, AgeRelief::NONE);
    }
}
