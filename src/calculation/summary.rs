//! Workload summary.
//!
//! Reduces the payroll breakdown to per-type lines and one total line, then
//! compares the yearly percent against the employment's payment target.

use rust_decimal::Decimal;

use crate::models::{
    AgeRelief, CalculationMode, Payroll, SemesterValue, Summary, SummaryItem, Theses,
};

/// Builds the summary for a resolved payroll.
///
/// Age relief is applied exactly once. In modes that include age relief the
/// payroll items already carry it, and the total sums the per-type relief.
/// In the other modes relief is computed on the total unrelieved percent.
///
/// The yearly percent is the semester mean of the relieved total plus the
/// thesis percent, which is never relieved. The balance change is that
/// yearly percent minus the mean of `payment`.
pub fn build_summary(
    payroll: &Payroll,
    theses: &Theses,
    age_relief: &AgeRelief,
    mode: CalculationMode,
    payment: SemesterValue,
) -> Summary {
    let items: Vec<SummaryItem> = payroll
        .items
        .iter()
        .map(|item| SummaryItem {
            payroll_type: item.payroll_type.clone(),
            percent: item.percent_without_age_relief,
            age_relief: item.age_relief,
            percent_with_age_relief: item.percent,
        })
        .collect();

    let percent: SemesterValue = items.iter().map(|item| item.percent).sum();
    let relief = if mode.includes_age_relief() {
        items.iter().map(|item| item.age_relief).sum()
    } else {
        age_relief.relief(percent)
    };
    let total = SummaryItem {
        payroll_type: SummaryItem::TOTAL.to_string(),
        percent,
        age_relief: relief,
        percent_with_age_relief: percent + relief,
    };

    let thesis_percent = theses.total_percent;
    let percent_with_age_relief = total.percent_with_age_relief.mean() + thesis_percent;
    let payment_mean = payment.mean();

    Summary {
        items,
        total,
        thesis_percent,
        percent_with_age_relief,
        payment_target: payment,
        payment: payment_mean,
        balance_change: percent_with_age_relief - payment_mean,
    }
}

/// Returns the closing balance carried out of a year.
pub fn closing_balance(opening_balance: Decimal, summary: &Summary) -> Decimal {
    opening_balance + summary.balance_change
}
