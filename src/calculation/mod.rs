//! Calculation logic for the Workload Calculation Engine.
//!
//! This module contains the unit conversion between lessons and percent,
//! the age relief calculation, the course, pool, posting and thesis
//! aggregators, payroll resolution, the workload summary, the balance
//! carry-forward between school years, and the [`WorkloadFactory`] that
//! combines them.

mod age_relief;
mod balance;
mod courses;
mod payroll;
mod pool;
mod postings;
mod summary;
mod theses;
mod unit_conversion;
mod workload;

pub use age_relief::{age_on, age_relief_for, relief_factor};
pub use balance::{BalanceUpdate, EmploymentLedger, recalculate_chain, recalculate_year};
pub use courses::aggregate_courses;
pub use payroll::resolve_payroll;
pub use pool::aggregate_pool;
pub use postings::{aggregate_postings, posting_semester};
pub use summary::{build_summary, closing_balance};
pub use theses::aggregate_theses;
pub use unit_conversion::{count_to_percent, lessons_to_percent, percent_to_lessons};
pub use workload::WorkloadFactory;
