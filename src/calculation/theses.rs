//! Thesis supervision aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{SchoolYear, ThesisEntry, ThesisItem, ThesisType, Theses, WorkloadWarning};

use super::count_to_percent;

/// Aggregates a teacher's thesis supervisions for a school year.
///
/// Each entry counts `count * percent_per_unit` of its thesis type. The
/// result applies to the whole year and is not split by semester. Entries
/// of another school year or with an unknown thesis type are skipped and
/// reported.
pub fn aggregate_theses(
    teacher_id: &str,
    entries: &[ThesisEntry],
    school_year: &SchoolYear,
    thesis_types: &HashMap<String, ThesisType>,
) -> (Theses, Vec<WorkloadWarning>) {
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries.iter().filter(|e| e.teacher_id == teacher_id) {
        if entry.school_year != school_year.code {
            debug!(entry_id = %entry.id, entry_school_year = %entry.school_year, "Skipping thesis of another school year");
            warnings.push(WorkloadWarning::new(
                "THESIS_WRONG_SCHOOL_YEAR",
                format!(
                    "Thesis entry '{}' belongs to school year {}, not {}",
                    entry.id, entry.school_year, school_year.code
                ),
                "low",
            ));
            continue;
        }

        let Some(thesis_type) = thesis_types.get(&entry.thesis_type) else {
            debug!(entry_id = %entry.id, thesis_type = %entry.thesis_type, "Skipping thesis of unknown type");
            warnings.push(WorkloadWarning::new(
                "THESIS_SKIPPED",
                format!(
                    "Thesis entry '{}' has unknown thesis type '{}'",
                    entry.id, entry.thesis_type
                ),
                "medium",
            ));
            continue;
        };

        let percent_each = count_to_percent(Decimal::ONE, thesis_type.percent_per_unit);
        items.push(ThesisItem {
            entry_id: entry.id.clone(),
            thesis_type: thesis_type.code.clone(),
            description: thesis_type.description.clone(),
            count: entry.count,
            percent_each,
            percent: count_to_percent(entry.count, thesis_type.percent_per_unit),
        });
    }

    let total_percent = items.iter().map(|item| item.percent).sum();
    (
        Theses {
            items,
            total_percent,
        },
        warnings,
    )
}
