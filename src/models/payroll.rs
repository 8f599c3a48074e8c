//! Payroll breakdown and workload summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SemesterValue;

/// The combined workload booked on one payroll type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollItem {
    /// Code of the payroll type.
    pub payroll_type: String,
    /// Description of the payroll type.
    pub description: String,
    /// Whether the payroll type is lesson-based.
    pub lesson_based: bool,
    /// Weekly lessons per semester; never relief-adjusted.
    pub lessons: SemesterValue,
    /// Percent before age relief.
    pub percent_without_age_relief: SemesterValue,
    /// Age relief folded into this payroll type; zero unless the calculation mode includes it.
    pub age_relief: SemesterValue,
    /// Reported percent (`percent_without_age_relief + age_relief`).
    pub percent: SemesterValue,
}

/// Payroll breakdown in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    /// One item per contributing payroll type, in ascending resolution order.
    pub items: Vec<PayrollItem>,
}

impl Payroll {
    /// Returns the item of a payroll type.
    pub fn get(&self, payroll_type: &str) -> Option<&PayrollItem> {
        self.items.iter().find(|item| item.payroll_type == payroll_type)
    }

    /// Returns the reported percent summed over all payroll types.
    pub fn total_percent(&self) -> SemesterValue {
        self.items.iter().map(|item| item.percent).sum()
    }
}

/// One row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Code of the payroll type, or `total` for the total row.
    pub payroll_type: String,
    /// Percent before age relief.
    pub percent: SemesterValue,
    /// Age relief.
    pub age_relief: SemesterValue,
    /// Percent including age relief.
    pub percent_with_age_relief: SemesterValue,
}

impl SummaryItem {
    /// The `payroll_type` value of the total row.
    pub const TOTAL: &'static str = "total";
}

/// Per-semester and yearly workload totals against the payment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// One row per contributing payroll type.
    pub items: Vec<SummaryItem>,
    /// Sum over all payroll types, with age relief applied exactly once.
    pub total: SummaryItem,
    /// Thesis percent for the year; not age-relieved.
    pub thesis_percent: Decimal,
    /// Yearly workload: mean of the total's semesters plus the thesis percent.
    pub percent_with_age_relief: Decimal,
    /// Payment target per semester.
    pub payment_target: SemesterValue,
    /// Yearly payment: mean of the payment target.
    pub payment: Decimal,
    /// `percent_with_age_relief - payment`; added to the opening balance.
    pub balance_change: Decimal,
}

impl Summary {
    /// Returns the row of a payroll type.
    pub fn get(&self, payroll_type: &str) -> Option<&SummaryItem> {
        self.items.iter().find(|item| item.payroll_type == payroll_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payroll_item(code: &str, percent: SemesterValue) -> PayrollItem {
        PayrollItem {
            payroll_type: code.to_string(),
            description: String::new(),
            lesson_based: false,
            lessons: SemesterValue::ZERO,
            percent_without_age_relief: percent,
            age_relief: SemesterValue::ZERO,
            percent,
        }
    }

    #[test]
    fn test_payroll_lookup_and_total() {
        let payroll = Payroll {
            items: vec![
                payroll_item("teaching", SemesterValue::new(dec("20"), dec("10"))),
                payroll_item("admin", SemesterValue::new(dec("5"), dec("5"))),
            ],
        };
        assert_eq!(payroll.get("admin").unwrap().percent.first, dec("5"));
        assert!(payroll.get("class").is_none());
        assert_eq!(
            payroll.total_percent(),
            SemesterValue::new(dec("25"), dec("15"))
        );
    }

    #[test]
    fn test_payroll_serialization_keeps_order() {
        let payroll = Payroll {
            items: vec![
                payroll_item("teaching", SemesterValue::ZERO),
                payroll_item("admin", SemesterValue::ZERO),
            ],
        };
        let json = serde_json::to_value(&payroll).unwrap();
        assert_eq!(json["items"][0]["payroll_type"], "teaching");
        assert_eq!(json["items"][1]["payroll_type"], "admin");
    }
}
