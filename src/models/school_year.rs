//! School year model, calculation modes and the school-year chain.
//!
//! School years are linked chronologically. The links are built once by
//! [`SchoolYears::new`] and never change afterwards.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Semester;

/// Determines how a school year reports workload and where age relief is applied.
///
/// # Example
///
/// ```
/// use workload_engine::models::CalculationMode;
///
/// let mode = CalculationMode::from_code("lessons_age_relief_included").unwrap();
/// assert_eq!(mode, CalculationMode::LessonsAgeReliefIncluded);
/// assert!(mode.includes_age_relief());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// No particular reporting unit; values are reported unrelieved.
    None,
    /// Lesson-based reporting; values are reported unrelieved.
    Lessons,
    /// Lesson-based reporting with age relief folded into each payroll category.
    LessonsAgeReliefIncluded,
    /// Percent-based reporting with age relief folded into each payroll category.
    PercentAgeReliefIncluded,
    /// Percent-based reporting; values are reported unrelieved.
    Percent,
}

impl CalculationMode {
    /// Every calculation mode, in declaration order.
    pub const ALL: [CalculationMode; 5] = [
        CalculationMode::None,
        CalculationMode::Lessons,
        CalculationMode::LessonsAgeReliefIncluded,
        CalculationMode::PercentAgeReliefIncluded,
        CalculationMode::Percent,
    ];

    /// Returns the stable code of this mode.
    pub fn code(self) -> &'static str {
        match self {
            CalculationMode::None => "none",
            CalculationMode::Lessons => "lessons",
            CalculationMode::LessonsAgeReliefIncluded => "lessons_age_relief_included",
            CalculationMode::PercentAgeReliefIncluded => "percent_age_relief_included",
            CalculationMode::Percent => "percent",
        }
    }

    /// Looks up a mode by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Returns true if age relief is applied per payroll category.
    pub fn includes_age_relief(self) -> bool {
        matches!(
            self,
            CalculationMode::LessonsAgeReliefIncluded | CalculationMode::PercentAgeReliefIncluded
        )
    }
}

/// A school year with its lesson divisors and calculation mode.
///
/// # Example
///
/// ```
/// use workload_engine::models::{CalculationMode, SchoolYear, Semester};
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let year = SchoolYear {
///     code: "2025".to_string(),
///     description: "2024/25".to_string(),
///     graduation_year: 2025,
///     weeks: 39,
///     calculation_mode: CalculationMode::Percent,
///     divisors: HashMap::new(),
///     archived: false,
///     finalised: false,
/// };
///
/// assert_eq!(year.semester_start(Semester::First), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
/// assert_eq!(year.semester_start(Semester::Second), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolYear {
    /// Unique code of the school year (e.g. "2025").
    pub code: String,
    /// Human-readable description (e.g. "2024/25").
    #[serde(default)]
    pub description: String,
    /// The calendar year in which the school year ends.
    pub graduation_year: i32,
    /// Number of teaching weeks.
    #[serde(default)]
    pub weeks: u32,
    /// How workload is reported for this year.
    pub calculation_mode: CalculationMode,
    /// Weekly lessons of a full position, per payroll type code.
    #[serde(default)]
    pub divisors: HashMap<String, Decimal>,
    /// Whether the year is archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether the year's figures are final.
    #[serde(default)]
    pub finalised: bool,
}

impl SchoolYear {
    /// Returns the first day of the given semester.
    ///
    /// Semester 1 starts on August 1 of the year before graduation, semester 2
    /// on February 1 of the graduation year.
    pub fn semester_start(&self, semester: Semester) -> NaiveDate {
        let (year, month) = match semester {
            Semester::First => (self.graduation_year - 1, 8),
            Semester::Second => (self.graduation_year, 2),
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns the day before the semester starts, used as the age relief reference date.
    pub fn semester_cutoff(&self, semester: Semester) -> NaiveDate {
        let start = self.semester_start(semester);
        start.checked_sub_days(Days::new(1)).unwrap_or(start)
    }

    /// Returns the divisor for a payroll type, if one is configured and positive.
    pub fn divisor(&self, payroll_type: &str) -> Option<Decimal> {
        self.divisors
            .get(payroll_type)
            .copied()
            .filter(|divisor| *divisor > Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Default)]
struct Links {
    previous: Option<String>,
    next: Option<String>,
}

/// All school years, ordered chronologically and linked to their neighbours.
///
/// Construction happens in two passes: all years are collected by code, then
/// the previous/next links are wired from the chronological order.
#[derive(Debug, Clone, Default)]
pub struct SchoolYears {
    years: Vec<SchoolYear>,
    index: HashMap<String, usize>,
    links: HashMap<String, Links>,
}

impl SchoolYears {
    /// Builds the school-year chain.
    ///
    /// Returns [`EngineError::DuplicateSchoolYear`] if two years share a code.
    pub fn new(years: Vec<SchoolYear>) -> EngineResult<Self> {
        let mut by_code: HashMap<String, SchoolYear> = HashMap::new();
        for year in years {
            if by_code.contains_key(&year.code) {
                return Err(EngineError::DuplicateSchoolYear { code: year.code });
            }
            by_code.insert(year.code.clone(), year);
        }

        let mut years: Vec<SchoolYear> = by_code.into_values().collect();
        years.sort_by(|a, b| {
            a.graduation_year
                .cmp(&b.graduation_year)
                .then_with(|| a.code.cmp(&b.code))
        });

        let index = years
            .iter()
            .enumerate()
            .map(|(i, year)| (year.code.clone(), i))
            .collect();

        let mut links: HashMap<String, Links> = HashMap::new();
        for (i, year) in years.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| years[p].code.clone());
            let next = years.get(i + 1).map(|n| n.code.clone());
            links.insert(year.code.clone(), Links { previous, next });
        }

        Ok(Self {
            years,
            index,
            links,
        })
    }

    /// Returns the school year with the given code.
    pub fn get(&self, code: &str) -> Option<&SchoolYear> {
        self.index.get(code).map(|&i| &self.years[i])
    }

    /// Returns the chronologically previous school year.
    pub fn previous(&self, code: &str) -> Option<&SchoolYear> {
        self.links
            .get(code)
            .and_then(|links| links.previous.as_deref())
            .and_then(|previous| self.get(previous))
    }

    /// Returns the chronologically next school year.
    pub fn next(&self, code: &str) -> Option<&SchoolYear> {
        self.links
            .get(code)
            .and_then(|links| links.next.as_deref())
            .and_then(|next| self.get(next))
    }

    /// Iterates over all school years, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SchoolYear> {
        self.years.iter()
    }

    /// Returns the number of school years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns true if there are no school years.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school_year(code: &str, graduation_year: i32) -> SchoolYear {
        SchoolYear {
            code: code.to_string(),
            description: String::new(),
            graduation_year,
            weeks: 39,
            calculation_mode: CalculationMode::Percent,
            divisors: HashMap::from([("teaching".to_string(), Decimal::from(28))]),
            archived: false,
            finalised: false,
        }
    }

    #[test]
    fn test_calculation_mode_codes_round_trip() {
        for mode in CalculationMode::ALL {
            assert_eq!(CalculationMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(CalculationMode::from_code("unknown"), None);
    }

    #[test]
    fn test_calculation_mode_serde_uses_code() {
        let json = serde_json::to_string(&CalculationMode::PercentAgeReliefIncluded).unwrap();
        assert_eq!(json, "\"percent_age_relief_included\"");
        let mode: CalculationMode = serde_json::from_str("\"lessons\"").unwrap();
        assert_eq!(mode, CalculationMode::Lessons);
    }

    #[test]
    fn test_only_relief_modes_include_age_relief() {
        assert!(!CalculationMode::None.includes_age_relief());
        assert!(!CalculationMode::Lessons.includes_age_relief());
        assert!(!CalculationMode::Percent.includes_age_relief());
        assert!(CalculationMode::LessonsAgeReliefIncluded.includes_age_relief());
        assert!(CalculationMode::PercentAgeReliefIncluded.includes_age_relief());
    }

    #[test]
    fn test_semester_starts_and_cutoffs() {
        let year = school_year("2026", 2026);
        assert_eq!(
            year.semester_start(Semester::First),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
        assert_eq!(
            year.semester_cutoff(Semester::First),
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()
        );
        assert_eq!(
            year.semester_cutoff(Semester::Second),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_divisor_missing_or_zero_is_none() {
        let mut year = school_year("2026", 2026);
        year.divisors.insert("admin".to_string(), Decimal::ZERO);
        assert_eq!(year.divisor("teaching"), Some(Decimal::from(28)));
        assert_eq!(year.divisor("admin"), None);
        assert_eq!(year.divisor("unknown"), None);
    }

    #[test]
    fn test_school_years_are_linked_chronologically() {
        let years = SchoolYears::new(vec![
            school_year("2027", 2027),
            school_year("2025", 2025),
            school_year("2026", 2026),
        ])
        .unwrap();

        let codes: Vec<&str> = years.iter().map(|y| y.code.as_str()).collect();
        assert_eq!(codes, vec!["2025", "2026", "2027"]);
        assert_eq!(years.next("2025").unwrap().code, "2026");
        assert_eq!(years.previous("2027").unwrap().code, "2026");
        assert!(years.previous("2025").is_none());
        assert!(years.next("2027").is_none());
        assert!(years.next("1999").is_none());
        assert_eq!(years.len(), 3);
    }

    #[test]
    fn test_duplicate_school_year_is_rejected() {
        let result = SchoolYears::new(vec![school_year("2025", 2025), school_year("2025", 2025)]);
        match result {
            Err(EngineError::DuplicateSchoolYear { code }) => assert_eq!(code, "2025"),
            other => panic!("Expected DuplicateSchoolYear, got {:?}", other),
        }
    }
}
