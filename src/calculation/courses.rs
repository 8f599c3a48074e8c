//! Course aggregation.
//!
//! Sums a teacher's share of their courses per payroll type and semester.

use tracing::debug;

use crate::models::{
    CategoryTotals, Course, CourseItem, Courses, PayrollTypes, SchoolYear, Semester,
    SemesterValue, WorkloadWarning,
};

use super::lessons_to_percent;

/// Aggregates a teacher's courses for a school year.
///
/// Only courses of the school year that list the teacher in either semester
/// are considered. Cancelled courses contribute nothing. A course whose
/// payroll type cannot be resolved (no grade, no payroll type on the grade,
/// or a code unknown to `payroll_types`) is skipped and reported as a
/// warning.
///
/// Returns the aggregation and the warnings raised.
pub fn aggregate_courses(
    teacher_id: &str,
    courses: &[Course],
    school_year: &SchoolYear,
    payroll_types: &PayrollTypes,
) -> (Courses, Vec<WorkloadWarning>) {
    let mut items = Vec::new();
    let mut totals = CategoryTotals::default();
    let mut warnings = Vec::new();

    for course in courses {
        if !course.has_teacher(teacher_id) || course.cancelled {
            continue;
        }

        if course.school_year != school_year.code {
            debug!(
                course_id = %course.id,
                course_school_year = %course.school_year,
                school_year = %school_year.code,
                "Skipping course of another school year"
            );
            warnings.push(WorkloadWarning::new(
                "COURSE_WRONG_SCHOOL_YEAR",
                format!(
                    "Course '{}' belongs to school year {}, not {}",
                    course.id, course.school_year, school_year.code
                ),
                "low",
            ));
            continue;
        }

        let Some(payroll_type) = course
            .payroll_type()
            .filter(|code| payroll_types.contains(code))
        else {
            debug!(course_id = %course.id, "Skipping course without resolvable payroll type");
            warnings.push(WorkloadWarning::new(
                "COURSE_SKIPPED",
                format!(
                    "Course '{}' ({}) has no resolvable payroll type",
                    course.id, course.subject.code
                ),
                "medium",
            ));
            continue;
        };

        let mut lessons = SemesterValue::ZERO;
        let mut percent = SemesterValue::ZERO;
        for semester in Semester::ALL {
            let share = course.lessons_for_teacher(teacher_id, semester);
            lessons.set(semester, share);
            percent.set(semester, lessons_to_percent(payroll_type, share, school_year));
        }

        totals.add_values(payroll_type, lessons, percent);
        items.push(CourseItem {
            course_id: course.id.clone(),
            subject: course.subject.code.clone(),
            grade: course
                .grade
                .as_ref()
                .map(|g| g.code.clone())
                .unwrap_or_default(),
            payroll_type: payroll_type.to_string(),
            lessons,
            percent,
        });
    }

    (Courses { items, totals }, warnings)
}
