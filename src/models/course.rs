//! Course, subject and grade models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Semester, SemesterValue};

/// Distinguishes class-lesson subjects from regular ones.
///
/// Class-lesson subjects are booked on the grade's class-lesson payroll type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    /// A regular teaching subject.
    #[default]
    Regular,
    /// A class-lesson subject (homeroom lessons).
    ClassLesson,
}

impl LessonType {
    /// Every lesson type, in declaration order.
    pub const ALL: [LessonType; 2] = [LessonType::Regular, LessonType::ClassLesson];

    /// Returns the stable code of this lesson type.
    pub fn code(self) -> &'static str {
        match self {
            LessonType::Regular => "regular",
            LessonType::ClassLesson => "class_lesson",
        }
    }

    /// Looks up a lesson type by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// A subject taught in courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique code of the subject.
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Whether this is a class-lesson subject.
    #[serde(default)]
    pub lesson_type: LessonType,
}

/// A grade (class) and the payroll types its courses are booked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Unique code of the grade.
    pub code: String,
    /// Payroll type for regular subjects.
    #[serde(default)]
    pub payroll_type: Option<String>,
    /// Payroll type for class-lesson subjects.
    #[serde(default)]
    pub class_lesson_payroll_type: Option<String>,
}

/// A course taught in a school year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: String,
    /// The subject taught.
    pub subject: Subject,
    /// The grade the course belongs to.
    #[serde(default)]
    pub grade: Option<Grade>,
    /// Code of the school year.
    pub school_year: String,
    /// Whether the course has been cancelled.
    #[serde(default)]
    pub cancelled: bool,
    /// Whether the course spans several classes.
    #[serde(default)]
    pub cross_class: bool,
    /// Weekly lessons per semester, before splitting among teachers.
    #[serde(default)]
    pub lessons: SemesterValue,
    /// Teacher ids assigned in semester 1.
    #[serde(default)]
    pub teachers1: Vec<String>,
    /// Teacher ids assigned in semester 2.
    #[serde(default)]
    pub teachers2: Vec<String>,
}

impl Course {
    /// Returns the teachers assigned in the given semester.
    pub fn teachers(&self, semester: Semester) -> &[String] {
        match semester {
            Semester::First => &self.teachers1,
            Semester::Second => &self.teachers2,
        }
    }

    /// Returns true if the teacher is assigned in either semester.
    pub fn has_teacher(&self, teacher_id: &str) -> bool {
        Semester::ALL
            .into_iter()
            .any(|semester| self.teachers(semester).iter().any(|t| t == teacher_id))
    }

    /// Returns the course lessons for the semester; zero if cancelled.
    pub fn lessons(&self, semester: Semester) -> Decimal {
        if self.cancelled {
            return Decimal::ZERO;
        }
        self.lessons.get(semester)
    }

    /// Returns one teacher's share of the course lessons for the semester.
    ///
    /// Lessons are split evenly among the semester's teachers. A teacher not
    /// assigned in that semester gets zero, as does everyone on a cancelled course.
    ///
    /// # Example
    ///
    /// ```
    /// use workload_engine::models::{Course, Semester, SemesterValue, Subject, LessonType};
    /// use rust_decimal::Decimal;
    ///
    /// let course = Course {
    ///     id: "c_001".to_string(),
    ///     subject: Subject { code: "math".into(), description: String::new(), lesson_type: LessonType::Regular },
    ///     grade: None,
    ///     school_year: "2025".to_string(),
    ///     cancelled: false,
    ///     cross_class: false,
    ///     lessons: SemesterValue::new(Decimal::from(6), Decimal::ZERO),
    ///     teachers1: vec!["t_001".into(), "t_002".into()],
    ///     teachers2: vec![],
    /// };
    /// assert_eq!(course.lessons_for_teacher("t_001", Semester::First), Decimal::from(3));
    /// assert_eq!(course.lessons_for_teacher("t_001", Semester::Second), Decimal::ZERO);
    /// ```
    pub fn lessons_for_teacher(&self, teacher_id: &str, semester: Semester) -> Decimal {
        let teachers = self.teachers(semester);
        if teachers.is_empty() || !teachers.iter().any(|t| t == teacher_id) {
            return Decimal::ZERO;
        }
        self.lessons(semester) / Decimal::from(teachers.len())
    }

    /// Returns the payroll type this course is booked on, if the grade defines it.
    pub fn payroll_type(&self) -> Option<&str> {
        let grade = self.grade.as_ref()?;
        match self.subject.lesson_type {
            LessonType::ClassLesson => grade.class_lesson_payroll_type.as_deref(),
            LessonType::Regular => grade.payroll_type.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_course(lesson_type: LessonType) -> Course {
        Course {
            id: "c_001".to_string(),
            subject: Subject {
                code: "math".to_string(),
                description: "Mathematics".to_string(),
                lesson_type,
            },
            grade: Some(Grade {
                code: "1a".to_string(),
                payroll_type: Some("teaching".to_string()),
                class_lesson_payroll_type: Some("class".to_string()),
            }),
            school_year: "2025".to_string(),
            cancelled: false,
            cross_class: false,
            lessons: SemesterValue::new(dec("6"), dec("4")),
            teachers1: vec!["t_001".to_string(), "t_002".to_string()],
            teachers2: vec!["t_001".to_string()],
        }
    }

    #[test]
    fn test_lessons_split_evenly_among_teachers() {
        let course = create_test_course(LessonType::Regular);
        assert_eq!(course.lessons_for_teacher("t_001", Semester::First), dec("3"));
        assert_eq!(course.lessons_for_teacher("t_002", Semester::First), dec("3"));
        assert_eq!(course.lessons_for_teacher("t_001", Semester::Second), dec("4"));
    }

    #[test]
    fn test_unassigned_teacher_gets_nothing() {
        let course = create_test_course(LessonType::Regular);
        assert_eq!(course.lessons_for_teacher("t_002", Semester::Second), Decimal::ZERO);
        assert_eq!(course.lessons_for_teacher("t_999", Semester::First), Decimal::ZERO);
    }

    #[test]
    fn test_no_teachers_yields_zero() {
        let mut course = create_test_course(LessonType::Regular);
        course.teachers1.clear();
        assert_eq!(course.lessons_for_teacher("t_001", Semester::First), Decimal::ZERO);
    }

    #[test]
    fn test_cancelled_course_yields_zero() {
        let mut course = create_test_course(LessonType::Regular);
        course.cancelled = true;
        for semester in Semester::ALL {
            assert_eq!(course.lessons(semester), Decimal::ZERO);
            assert_eq!(course.lessons_for_teacher("t_001", semester), Decimal::ZERO);
        }
    }

    #[test]
    fn test_payroll_type_depends_on_lesson_type() {
        assert_eq!(
            create_test_course(LessonType::Regular).payroll_type(),
            Some("teaching")
        );
        assert_eq!(
            create_test_course(LessonType::ClassLesson).payroll_type(),
            Some("class")
        );
    }

    #[test]
    fn test_payroll_type_missing_without_grade() {
        let mut course = create_test_course(LessonType::Regular);
        course.grade = None;
        assert_eq!(course.payroll_type(), None);
    }

    #[test]
    fn test_has_teacher_checks_both_semesters() {
        let course = create_test_course(LessonType::Regular);
        assert!(course.has_teacher("t_002"));
        assert!(!course.has_teacher("t_003"));
    }

    #[test]
    fn test_lesson_type_codes() {
        assert_eq!(LessonType::from_code("class_lesson"), Some(LessonType::ClassLesson));
        assert_eq!(LessonType::Regular.code(), "regular");
        assert_eq!(LessonType::from_code("other"), None);
    }
}
