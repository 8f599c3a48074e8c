//! Teacher age and the age relief applied to workload percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Semester, SemesterValue};

/// A teacher's age in whole years, or unknown when no birthday is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Age {
    /// Age in completed years.
    Known(u32),
    /// No usable birthday.
    Unknown,
}

/// The age relief factors of one teacher for both semesters of a school year.
///
/// Factors are percentages (e.g. 4 for 4 %). Relief is multiplicative:
/// `relief = value * factor / 100`.
///
/// # Example
///
/// ```
/// use workload_engine::models::{Age, AgeRelief, SemesterValue};
/// use rust_decimal::Decimal;
///
/// let relief = AgeRelief {
///     ages: [Age::Known(52), Age::Known(52)],
///     factor: SemesterValue::new(Decimal::from(4), Decimal::from(4)),
/// };
/// let percent = SemesterValue::new(Decimal::from(50), Decimal::from(25));
/// assert_eq!(relief.with_age_relief(percent), SemesterValue::new(Decimal::from(52), Decimal::from(26)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRelief {
    /// Age on the cutoff date of semester 1 and semester 2.
    pub ages: [Age; 2],
    /// Relief factor in percent per semester.
    pub factor: SemesterValue,
}

impl AgeRelief {
    /// No relief in either semester.
    pub const NONE: AgeRelief = AgeRelief {
        ages: [Age::Unknown, Age::Unknown],
        factor: SemesterValue::ZERO,
    };

    /// Returns the age on the cutoff date of the given semester.
    pub fn age(&self, semester: Semester) -> Age {
        match semester {
            Semester::First => self.ages[0],
            Semester::Second => self.ages[1],
        }
    }

    /// Returns the relief factor of the given semester.
    pub fn factor(&self, semester: Semester) -> Decimal {
        self.factor.get(semester)
    }

    /// Returns the relief amount for a single semester value.
    ///
    /// A value too large to relieve yields zero relief.
    pub fn relief_for(&self, semester: Semester, value: Decimal) -> Decimal {
        value
            .checked_mul(self.factor(semester))
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the relief amount for both semesters.
    pub fn relief(&self, value: SemesterValue) -> SemesterValue {
        value.map(|semester, v| self.relief_for(semester, v))
    }

    /// Returns the value with age relief added.
    pub fn with_age_relief(&self, value: SemesterValue) -> SemesterValue {
        value + self.relief(value)
    }

    /// Removes age relief from a relieved value; the inverse of [`Self::with_age_relief`].
    pub fn without_age_relief(&self, value: SemesterValue) -> SemesterValue {
        value.map(|semester, v| {
            v.checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED + self.factor(semester)))
                .unwrap_or(Decimal::ZERO)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn relief(first: &str, second: &str) -> AgeRelief {
        AgeRelief {
            ages: [Age::Known(55), Age::Known(55)],
            factor: SemesterValue::new(dec(first), dec(second)),
        }
    }

    #[test]
    fn test_relief_is_multiplicative() {
        let relief = relief("8", "12");
        let value = SemesterValue::new(dec("50"), dec("25"));
        assert_eq!(relief.relief(value), SemesterValue::new(dec("4"), dec("3")));
        assert_eq!(
            relief.with_age_relief(value),
            SemesterValue::new(dec("54"), dec("28"))
        );
    }

    #[test]
    fn test_without_age_relief_inverts_with() {
        let relief = relief("4", "8");
        let value = SemesterValue::new(dec("26"), dec("27"));
        let back = relief.without_age_relief(relief.with_age_relief(value));
        assert_eq!(back, value);
    }

    #[test]
    fn test_no_relief_leaves_values_unchanged() {
        let value = SemesterValue::new(dec("33.3"), dec("10"));
        assert_eq!(AgeRelief::NONE.with_age_relief(value), value);
        assert_eq!(AgeRelief::NONE.age(Semester::First), Age::Unknown);
    }

    #[test]
    fn test_oversized_value_gets_no_relief() {
        let relief = relief("12", "12");
        let value = SemesterValue::new(Decimal::MAX, dec("10"));
        assert_eq!(relief.relief(value), SemesterValue::new(Decimal::ZERO, dec("1.2")));
        assert_eq!(relief.with_age_relief(value).first, Decimal::MAX);
    }

    #[test]
    fn test_age_serialization() {
        assert_eq!(
            serde_json::to_string(&Age::Known(50)).unwrap(),
            "{\"known\":50}"
        );
        assert_eq!(serde_json::to_string(&Age::Unknown).unwrap(), "\"unknown\"");
    }
}
