//! Balance carry-forward between consecutive school years.
//!
//! The closing balance of a teacher's employment in one school year becomes
//! the opening balance of their employment in the next. The
//! [`EmploymentLedger`] is the only mutable state of the engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employment, SchoolYear, SchoolYears, Workload};

/// Employments keyed by teacher and school year.
#[derive(Debug, Clone, Default)]
pub struct EmploymentLedger {
    employments: BTreeMap<(String, String), Employment>,
}

impl EmploymentLedger {
    /// Builds a ledger. Two employments for the same teacher and school year
    /// are rejected with [`EngineError::DuplicateEmployment`].
    pub fn new(employments: Vec<Employment>) -> EngineResult<Self> {
        let mut ledger = BTreeMap::new();
        for employment in employments {
            let key = (employment.teacher_id.clone(), employment.school_year.clone());
            if ledger.contains_key(&key) {
                return Err(EngineError::DuplicateEmployment {
                    teacher_id: key.0,
                    school_year: key.1,
                });
            }
            ledger.insert(key, employment);
        }
        Ok(Self {
            employments: ledger,
        })
    }

    /// The employment of `teacher_id` in `school_year`, if any.
    pub fn get(&self, teacher_id: &str, school_year: &str) -> Option<&Employment> {
        self.employments
            .get(&(teacher_id.to_string(), school_year.to_string()))
    }

    /// Mutable access to a single employment.
    pub fn get_mut(&mut self, teacher_id: &str, school_year: &str) -> Option<&mut Employment> {
        self.employments
            .get_mut(&(teacher_id.to_string(), school_year.to_string()))
    }

    /// Employments ordered by teacher, then school year.
    pub fn iter(&self) -> impl Iterator<Item = &Employment> {
        self.employments.values()
    }

    /// Number of employments.
    pub fn len(&self) -> usize {
        self.employments.len()
    }

    /// Whether the ledger holds no employments.
    pub fn is_empty(&self) -> bool {
        self.employments.is_empty()
    }

    /// Consumes the ledger, keeping the iteration order.
    pub fn into_vec(self) -> Vec<Employment> {
        self.employments.into_values().collect()
    }
}

/// The outcome of recalculating one year's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceUpdate {
    /// Teacher whose employment was recalculated.
    pub teacher_id: String,
    /// School year of the recalculated employment.
    pub school_year: String,
    /// Opening balance the calculation started from.
    pub opening_balance: Decimal,
    /// Yearly percent minus mean payment.
    pub change: Decimal,
    /// Opening balance plus change.
    pub closing_balance: Decimal,
    /// The following school year whose opening balance was overwritten.
    pub propagated_to: Option<String>,
}

/// Stores a workload's closing balance on its employment and carries it to
/// the teacher's employment in the next school year, if there is one.
///
/// Only the next year's opening balance is touched. Its own closing balance
/// is left for the caller to recalculate.
pub fn recalculate_year(
    ledger: &mut EmploymentLedger,
    school_years: &SchoolYears,
    workload: &Workload,
) -> EngineResult<BalanceUpdate> {
    let employment = ledger
        .get_mut(&workload.teacher_id, &workload.school_year)
        .ok_or_else(|| EngineError::EmploymentNotFound {
            teacher_id: workload.teacher_id.clone(),
            school_year: workload.school_year.clone(),
        })?;

    let closing = workload.closing_balance();
    employment.closing_balance = closing;

    let propagated_to = school_years
        .next(&workload.school_year)
        .and_then(|next| {
            ledger
                .get_mut(&workload.teacher_id, &next.code)
                .map(|following| {
                    following.opening_balance = closing;
                    next.code.clone()
                })
        });

    debug!(
        teacher_id = %workload.teacher_id,
        school_year = %workload.school_year,
        closing_balance = %closing,
        propagated_to = ?propagated_to,
        "Recalculated balance"
    );

    Ok(BalanceUpdate {
        teacher_id: workload.teacher_id.clone(),
        school_year: workload.school_year.clone(),
        opening_balance: workload.opening_balance(),
        change: workload.balance_change(),
        closing_balance: closing,
        propagated_to,
    })
}

/// Recalculates `from_year` and every following school year in order.
///
/// `compute` is called with the ledger's current employment, so each year
/// sees the opening balance carried in from the year before. The walk ends
/// at the first school year in which the teacher has no employment.
pub fn recalculate_chain<F>(
    ledger: &mut EmploymentLedger,
    school_years: &SchoolYears,
    teacher_id: &str,
    from_year: &str,
    mut compute: F,
) -> EngineResult<Vec<BalanceUpdate>>
where
    F: FnMut(&Employment, &SchoolYear) -> EngineResult<Workload>,
{
    let mut year = school_years
        .get(from_year)
        .ok_or_else(|| EngineError::SchoolYearNotFound {
            code: from_year.to_string(),
        })?;
    let mut updates = Vec::new();

    loop {
        let Some(employment) = ledger.get(teacher_id, &year.code) else {
            break;
        };
        let workload = compute(employment, year)?;
        updates.push(recalculate_year(ledger, school_years, &workload)?);

        match school_years.next(&year.code) {
            Some(next) => year = next,
            None => break,
        }
    }

    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AgeRelief, CalculationMode, Courses, Payroll, Pool, Postings, SemesterValue, Summary,
        SummaryItem, Theses,
    };
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn school_years() -> SchoolYears {
        let year = |code: &str, graduation_year: i32| SchoolYear {
            code: code.to_string(),
            description: String::new(),
            graduation_year,
            weeks: 39,
            calculation_mode: CalculationMode::Percent,
            divisors: HashMap::new(),
            archived: false,
            finalised: false,
        };
        SchoolYears::new(vec![year("2025", 2025), year("2026", 2026), year("2027", 2027)]).unwrap()
    }

    fn employment(teacher_id: &str, school_year: &str, opening: &str) -> Employment {
        Employment {
            id: format!("{}_{}", teacher_id, school_year),
            teacher_id: teacher_id.to_string(),
            school_year: school_year.to_string(),
            division: String::new(),
            min_percent: Decimal::ZERO,
            max_percent: Decimal::ZERO,
            payment: SemesterValue::new(dec("50"), dec("50")),
            opening_balance: dec(opening),
            closing_balance: Decimal::ZERO,
            temporary: false,
        }
    }

    /// A workload whose balance changes by `change` over the employment's
    /// opening balance.
    fn workload(employment: &Employment, change: &str) -> Workload {
        let change = dec(change);
        let total = SummaryItem {
            payroll_type: SummaryItem::TOTAL.to_string(),
            percent: SemesterValue::ZERO,
            age_relief: SemesterValue::ZERO,
            percent_with_age_relief: SemesterValue::ZERO,
        };
        Workload {
            teacher_id: employment.teacher_id.clone(),
            employment_id: employment.id.clone(),
            school_year: employment.school_year.clone(),
            division: employment.division.clone(),
            calculation_mode: CalculationMode::Percent,
            age_relief: AgeRelief::NONE,
            courses: Courses::default(),
            pool: Pool::default(),
            postings: Postings::default(),
            theses: Theses::default(),
            payroll: Payroll::default(),
            summary: Summary {
                items: vec![],
                total,
                thesis_percent: Decimal::ZERO,
                percent_with_age_relief: Decimal::ZERO,
                payment_target: SemesterValue::ZERO,
                payment: Decimal::ZERO,
                balance_change: change,
            },
            opening_balance: employment.opening_balance,
            closing_balance: employment.opening_balance + change,
            warnings: vec![],
        }
    }

    #[test]
    fn test_ledger_rejects_duplicate_employment() {
        let result = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2025", "1"),
        ]);
        assert!(matches!(
            result,
            Err(EngineError::DuplicateEmployment { .. })
        ));
    }

    #[test]
    fn test_recalculate_year_propagates_to_next_year() {
        let mut ledger = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2026", "0"),
        ])
        .unwrap();
        let w = workload(ledger.get("t1", "2025").unwrap(), "5");

        let update = recalculate_year(&mut ledger, &school_years(), &w).unwrap();

        assert_eq!(update.closing_balance, dec("5"));
        assert_eq!(update.propagated_to.as_deref(), Some("2026"));
        assert_eq!(ledger.get("t1", "2025").unwrap().closing_balance, dec("5"));
        assert_eq!(ledger.get("t1", "2026").unwrap().opening_balance, dec("5"));
    }

    #[test]
    fn test_recalculate_year_does_not_cascade() {
        let mut ledger = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2026", "0"),
            employment("t1", "2027", "9"),
        ])
        .unwrap();
        let w = workload(ledger.get("t1", "2025").unwrap(), "5");
        recalculate_year(&mut ledger, &school_years(), &w).unwrap();

        assert_eq!(ledger.get("t1", "2026").unwrap().closing_balance, Decimal::ZERO);
        assert_eq!(ledger.get("t1", "2027").unwrap().opening_balance, dec("9"));
    }

    #[test]
    fn test_recalculate_year_without_following_employment() {
        let mut ledger = EmploymentLedger::new(vec![employment("t1", "2027", "1")]).unwrap();
        let w = workload(ledger.get("t1", "2027").unwrap(), "-2");
        let update = recalculate_year(&mut ledger, &school_years(), &w).unwrap();
        assert_eq!(update.closing_balance, dec("-1"));
        assert!(update.propagated_to.is_none());
    }

    #[test]
    fn test_recalculate_year_unknown_employment() {
        let mut ledger = EmploymentLedger::default();
        let w = workload(&employment("t1", "2025", "0"), "1");
        let err = recalculate_year(&mut ledger, &school_years(), &w).unwrap_err();
        assert!(matches!(err, EngineError::EmploymentNotFound { .. }));
    }

    #[test]
    fn test_recalculate_chain_carries_balances_forward() {
        let mut ledger = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2026", "0"),
            employment("t1", "2027", "0"),
        ])
        .unwrap();

        let updates = recalculate_chain(&mut ledger, &school_years(), "t1", "2025", |e, _| {
            Ok(workload(e, "2"))
        })
        .unwrap();

        let closings: Vec<Decimal> = updates.iter().map(|u| u.closing_balance).collect();
        assert_eq!(closings, vec![dec("2"), dec("4"), dec("6")]);
        assert_eq!(ledger.get("t1", "2027").unwrap().opening_balance, dec("4"));
    }

    #[test]
    fn test_recalculate_chain_stops_at_gap() {
        let mut ledger = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2027", "3"),
        ])
        .unwrap();

        let updates = recalculate_chain(&mut ledger, &school_years(), "t1", "2025", |e, _| {
            Ok(workload(e, "1"))
        })
        .unwrap();

        assert_eq!(updates.len(), 1);
        assert!(updates[0].propagated_to.is_none());
        assert_eq!(ledger.get("t1", "2027").unwrap().opening_balance, dec("3"));
    }

    #[test]
    fn test_recalculate_chain_is_idempotent() {
        let mut ledger = EmploymentLedger::new(vec![
            employment("t1", "2025", "0"),
            employment("t1", "2026", "0"),
        ])
        .unwrap();
        let years = school_years();

        let first = recalculate_chain(&mut ledger, &years, "t1", "2025", |e, _| {
            Ok(workload(e, "1.5"))
        })
        .unwrap();
        let second = recalculate_chain(&mut ledger, &years, "t1", "2025", |e, _| {
            Ok(workload(e, "1.5"))
        })
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_recalculate_chain_unknown_start_year() {
        let mut ledger = EmploymentLedger::default();
        let err = recalculate_chain(&mut ledger, &school_years(), "t1", "1999", |e, _| {
            Ok(workload(e, "0"))
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::SchoolYearNotFound { .. }));
    }

    #[test]
    fn test_recalculate_chain_propagates_compute_error() {
        let mut ledger = EmploymentLedger::new(vec![employment("t1", "2025", "0")]).unwrap();
        let err = recalculate_chain(&mut ledger, &school_years(), "t1", "2025", |_, _| {
            Err(EngineError::CalculationError {
                message: "boom".to_string(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::CalculationError { .. }));
    }
}
