//! Core data models for the Workload Calculation Engine.
//!
//! This module contains the administrative input records (school years,
//! employments, courses, pool entries, postings, theses) and the derived
//! workload results.

mod age;
mod aggregates;
mod course;
mod employment;
mod payroll;
mod payroll_type;
mod pool;
mod posting;
mod school_year;
mod semester;
mod thesis;
mod workload;

pub use age::{Age, AgeRelief};
pub use aggregates::{
    CategoryTotal, CategoryTotals, CourseItem, Courses, Pool, PoolItem, PostingDetailItem,
    PostingItem, Postings, ThesisItem, Theses,
};
pub use course::{Course, Grade, LessonType, Subject};
pub use employment::{Employment, Teacher};
pub use payroll::{Payroll, PayrollItem, Summary, SummaryItem};
pub use payroll_type::{PayrollType, PayrollTypes};
pub use pool::{PoolEntry, PoolType};
pub use posting::{Posting, PostingDetail};
pub use school_year::{CalculationMode, SchoolYear, SchoolYears};
pub use semester::{Semester, SemesterValue};
pub use thesis::{ThesisEntry, ThesisType};
pub use workload::{Workload, WorkloadInput, WorkloadWarning, Workloads};
