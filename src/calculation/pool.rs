//! Pool aggregation.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    CategoryTotals, PayrollTypes, Pool, PoolEntry, PoolItem, PoolType, SchoolYear, SemesterValue,
    WorkloadWarning,
};

/// Aggregates a teacher's pool bookings for a school year.
///
/// Pool percentages are summed per pool type's payroll type, independently
/// per semester. Entries of other teachers are ignored. Entries of another
/// school year, with an unknown pool type, or whose pool type books onto a
/// payroll type missing from `payroll_types` are skipped and reported.
pub fn aggregate_pool(
    teacher_id: &str,
    entries: &[PoolEntry],
    school_year: &SchoolYear,
    pool_types: &HashMap<String, PoolType>,
    payroll_types: &PayrollTypes,
) -> (Pool, Vec<WorkloadWarning>) {
    let mut items = Vec::new();
    let mut totals = CategoryTotals::default();
    let mut warnings = Vec::new();

    for entry in entries.iter().filter(|e| e.teacher_id == teacher_id) {
        if entry.school_year != school_year.code {
            debug!(entry_id = %entry.id, entry_school_year = %entry.school_year, "Skipping pool entry of another school year");
            warnings.push(WorkloadWarning::new(
                "POOL_ENTRY_WRONG_SCHOOL_YEAR",
                format!(
                    "Pool entry '{}' belongs to school year {}, not {}",
                    entry.id, entry.school_year, school_year.code
                ),
                "low",
            ));
            continue;
        }

        let Some(pool_type) = pool_types.get(&entry.pool_type) else {
            debug!(entry_id = %entry.id, pool_type = %entry.pool_type, "Skipping pool entry of unknown type");
            warnings.push(WorkloadWarning::new(
                "POOL_ENTRY_SKIPPED",
                format!(
                    "Pool entry '{}' has unknown pool type '{}'",
                    entry.id, entry.pool_type
                ),
                "medium",
            ));
            continue;
        };

        if !payroll_types.contains(&pool_type.payroll_type) {
            debug!(
                entry_id = %entry.id,
                payroll_type = %pool_type.payroll_type,
                "Skipping pool entry of unknown payroll type"
            );
            warnings.push(WorkloadWarning::new(
                "POOL_ENTRY_SKIPPED",
                format!(
                    "Pool entry '{}' books onto unknown payroll type '{}'",
                    entry.id, pool_type.payroll_type
                ),
                "medium",
            ));
            continue;
        }

        totals.add_values(&pool_type.payroll_type, SemesterValue::ZERO, entry.percent);
        items.push(PoolItem {
            entry_id: entry.id.clone(),
            pool_type: pool_type.code.clone(),
            description: if entry.description.is_empty() {
                pool_type.description.clone()
            } else {
                entry.description.clone()
            },
            payroll_type: pool_type.payroll_type.clone(),
            percent: entry.percent,
        });
    }

    (Pool { items, totals }, warnings)
}
