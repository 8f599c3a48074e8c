//! Teacher and employment models.
//!
//! An [`Employment`] is one teacher's contract for one school year. Its
//! closing balance is the only field the engine ever writes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SemesterValue;

/// A teacher whose workload is calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier for the teacher.
    pub id: String,
    /// The teacher's first name.
    #[serde(default)]
    pub first_name: String,
    /// The teacher's last name.
    #[serde(default)]
    pub last_name: String,
    /// The teacher's date of birth, if known.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// A teacher's contract for one school year.
///
/// # Examples
///
/// ```
/// use workload_engine::models::{Employment, SemesterValue};
/// use rust_decimal::Decimal;
///
/// let employment = Employment {
///     id: "emp_001".to_string(),
///     teacher_id: "t_001".to_string(),
///     school_year: "2025".to_string(),
///     division: "gym".to_string(),
///     min_percent: Decimal::from(40),
///     max_percent: Decimal::from(60),
///     payment: SemesterValue::new(Decimal::from(50), Decimal::from(50)),
///     opening_balance: Decimal::ZERO,
///     closing_balance: Decimal::ZERO,
///     temporary: false,
/// };
/// assert_eq!(employment.payment_target(), Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    /// Unique identifier for the employment.
    pub id: String,
    /// The teacher this employment belongs to.
    pub teacher_id: String,
    /// Code of the school year this employment covers.
    pub school_year: String,
    /// The division (department) employing the teacher.
    #[serde(default)]
    pub division: String,
    /// Contractual minimum percent of a full position.
    #[serde(default)]
    pub min_percent: Decimal,
    /// Contractual maximum percent of a full position.
    #[serde(default)]
    pub max_percent: Decimal,
    /// Percent of a full position paid per semester.
    #[serde(default)]
    pub payment: SemesterValue,
    /// Balance carried in from the previous school year.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// Balance carried out into the next school year.
    #[serde(default)]
    pub closing_balance: Decimal,
    /// Whether the contract is temporary.
    #[serde(default)]
    pub temporary: bool,
}

impl Employment {
    /// Returns the yearly payment target: the mean of both semester payments.
    pub fn payment_target(&self) -> Decimal {
        self.payment.mean()
    }

    /// Returns true if `percent` lies within the contractual range.
    ///
    /// An employment without a maximum accepts every value.
    pub fn accepts_percent(&self, percent: Decimal) -> bool {
        if self.max_percent <= Decimal::ZERO {
            return true;
        }
        percent >= self.min_percent && percent <= self.max_percent
    }
}
