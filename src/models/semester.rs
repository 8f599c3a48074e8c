//! Semester and per-semester value types.
//!
//! A school year has exactly two semesters. Every per-semester accessor in
//! the engine takes a [`Semester`], so an out-of-range semester can only
//! appear at the boundary where a raw number is converted.

use std::ops::{Add, AddAssign, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the two semesters of a school year.
///
/// Serialized as the number `1` or `2`.
///
/// # Example
///
/// ```
/// use workload_engine::models::Semester;
///
/// assert_eq!(Semester::try_from(2).unwrap(), Semester::Second);
/// assert!(Semester::try_from(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    /// The first semester, starting in August.
    First,
    /// The second semester, starting in February.
    Second,
}

impl Semester {
    /// Both semesters in chronological order.
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];

    /// Returns the semester number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }
}

impl TryFrom<u8> for Semester {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Semester::First),
            2 => Ok(Semester::Second),
            _ => Err(EngineError::InvalidSemester { value }),
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.number()
    }
}

/// A pair of values, one per semester.
///
/// Used for lessons, percentages, age relief factors and payment targets.
///
/// # Example
///
/// ```
/// use workload_engine::models::{Semester, SemesterValue};
/// use rust_decimal::Decimal;
///
/// let value = SemesterValue::new(Decimal::from(20), Decimal::from(30));
/// assert_eq!(value.get(Semester::Second), Decimal::from(30));
/// assert_eq!(value.mean(), Decimal::from(25));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterValue {
    /// The value for the first semester.
    #[serde(default)]
    pub first: Decimal,
    /// The value for the second semester.
    #[serde(default)]
    pub second: Decimal,
}

impl SemesterValue {
    /// Both semesters zero.
    pub const ZERO: SemesterValue = SemesterValue {
        first: Decimal::ZERO,
        second: Decimal::ZERO,
    };

    /// Creates a value pair from the two semester values.
    pub fn new(first: Decimal, second: Decimal) -> Self {
        Self { first, second }
    }

    /// Creates a value pair with the given value in one semester and zero in the other.
    pub fn only(semester: Semester, value: Decimal) -> Self {
        let mut result = Self::ZERO;
        result.set(semester, value);
        result
    }

    /// Returns the value for the given semester.
    pub fn get(&self, semester: Semester) -> Decimal {
        match semester {
            Semester::First => self.first,
            Semester::Second => self.second,
        }
    }

    /// Replaces the value for the given semester.
    pub fn set(&mut self, semester: Semester, value: Decimal) {
        match semester {
            Semester::First => self.first = value,
            Semester::Second => self.second = value,
        }
    }

    /// Adds to the value for the given semester.
    pub fn add(&mut self, semester: Semester, value: Decimal) {
        match semester {
            Semester::First => self.first += value,
            Semester::Second => self.second += value,
        }
    }

    /// Applies `f` to both semester values.
    pub fn map<F: Fn(Semester, Decimal) -> Decimal>(&self, f: F) -> Self {
        Self {
            first: f(Semester::First, self.first),
            second: f(Semester::Second, self.second),
        }
    }

    /// Returns the mean of both semesters.
    pub fn mean(&self) -> Decimal {
        (self.first + self.second) / Decimal::TWO
    }

    /// Returns true if both semester values are zero.
    pub fn is_zero(&self) -> bool {
        self.first.is_zero() && self.second.is_zero()
    }
}

impl Add for SemesterValue {
    type Output = SemesterValue;

    fn add(self, rhs: SemesterValue) -> SemesterValue {
        SemesterValue {
            first: self.first + rhs.first,
            second: self.second + rhs.second,
        }
    }
}

impl AddAssign for SemesterValue {
    fn add_assign(&mut self, rhs: SemesterValue) {
        self.first += rhs.first;
        self.second += rhs.second;
    }
}

impl Sub for SemesterValue {
    type Output = SemesterValue;

    fn sub(self, rhs: SemesterValue) -> SemesterValue {
        SemesterValue {
            first: self.first - rhs.first,
            second: self.second - rhs.second,
        }
    }
}

impl std::iter::Sum for SemesterValue {
    fn sum<I: Iterator<Item = SemesterValue>>(iter: I) -> Self {
        iter.fold(SemesterValue::ZERO, |acc, value| acc + value)
    }
}
