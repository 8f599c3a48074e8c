//! Workload assembly.
//!
//! The [`WorkloadFactory`] runs the aggregators, the payroll resolver and
//! the summary builder over one input snapshot and produces a [`Workload`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Workload, WorkloadInput, WorkloadWarning, Workloads};

use super::{
    age_relief_for, aggregate_courses, aggregate_pool, aggregate_postings, aggregate_theses,
    build_summary, closing_balance, resolve_payroll,
};

/// Computes workloads against a fixed configuration.
///
/// # Example
///
/// ```no_run
/// use workload_engine::calculation::WorkloadFactory;
/// use workload_engine::config::ConfigLoader;
/// use workload_engine::models::WorkloadInput;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let factory = WorkloadFactory::new(loader.config());
///
/// let input: WorkloadInput = serde_json::from_str(r#"{
///     "teacher": {"id": "t_001"},
///     "employment": {"id": "e_001", "teacher_id": "t_001", "school_year": "2025"}
/// }"#).unwrap();
/// let workload = factory.workload(&input)?;
/// println!("Closing balance: {}", workload.closing_balance());
/// # Ok::<(), workload_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkloadFactory<'a> {
    config: &'a EngineConfig,
}

impl<'a> WorkloadFactory<'a> {
    /// Creates a factory over a loaded configuration.
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Computes the workload of one teacher's employment.
    ///
    /// Fails only if the employment's school year is not configured or the
    /// employment belongs to another teacher. Inconsistent records are
    /// skipped and listed in [`Workload::warnings`]. The result depends on
    /// `input` and the configuration alone, so unchanged input always yields
    /// an identical workload.
    pub fn workload(&self, input: &WorkloadInput) -> EngineResult<Workload> {
        let teacher = &input.teacher;
        let employment = &input.employment;

        let school_year = self
            .config
            .school_years()
            .get(&employment.school_year)
            .ok_or_else(|| EngineError::SchoolYearNotFound {
                code: employment.school_year.clone(),
            })?;

        if employment.teacher_id != teacher.id {
            return Err(EngineError::InvalidInput {
                field: "employment.teacher_id".to_string(),
                message: format!(
                    "employment '{}' belongs to teacher '{}', not '{}'",
                    employment.id, employment.teacher_id, teacher.id
                ),
            });
        }

        let payroll_types = self.config.payroll_types();
        let mode = school_year.calculation_mode;
        let age_relief = age_relief_for(teacher, school_year);
        let mut warnings = Vec::new();

        let (courses, w) = aggregate_courses(&teacher.id, &input.courses, school_year, payroll_types);
        warnings.extend(w);
        let (pool, w) = aggregate_pool(
            &teacher.id,
            &input.pool_entries,
            school_year,
            self.config.pool_types(),
            payroll_types,
        );
        warnings.extend(w);
        let (postings, w) = aggregate_postings(
            &teacher.id,
            &input.postings,
            school_year,
            payroll_types,
            &age_relief,
        );
        warnings.extend(w);
        let (theses, w) = aggregate_theses(
            &teacher.id,
            &input.theses,
            school_year,
            self.config.thesis_types(),
        );
        warnings.extend(w);

        let payroll = resolve_payroll(&courses, &pool, &postings, payroll_types, &age_relief, mode);
        let summary = build_summary(&payroll, &theses, &age_relief, mode, employment.payment);

        if !employment.accepts_percent(summary.percent_with_age_relief) {
            warnings.push(WorkloadWarning::new(
                "EMPLOYMENT_RANGE",
                format!(
                    "Workload of {}% is outside the employment range {}% to {}%",
                    summary.percent_with_age_relief.round_dp(3),
                    employment.min_percent,
                    employment.max_percent
                ),
                "low",
            ));
        }

        let closing = closing_balance(employment.opening_balance, &summary);

        debug!(
            teacher_id = %teacher.id,
            school_year = %school_year.code,
            mode = mode.code(),
            percent = %summary.percent_with_age_relief,
            balance_change = %summary.balance_change,
            closing_balance = %closing,
            warnings = warnings.len(),
            "Computed workload"
        );

        Ok(Workload {
            teacher_id: teacher.id.clone(),
            employment_id: employment.id.clone(),
            school_year: school_year.code.clone(),
            division: employment.division.clone(),
            calculation_mode: mode,
            age_relief,
            courses,
            pool,
            postings,
            theses,
            payroll,
            summary,
            opening_balance: employment.opening_balance,
            closing_balance: closing,
            warnings,
        })
    }

    /// Computes the workloads of all employments in a school year.
    ///
    /// Inputs whose employment belongs to another school year are ignored.
    /// If `division` is given, only employments of that division are
    /// included.
    pub fn workloads(
        &self,
        school_year: &str,
        division: Option<&str>,
        inputs: &[WorkloadInput],
    ) -> EngineResult<Workloads> {
        if self.config.school_years().get(school_year).is_none() {
            return Err(EngineError::SchoolYearNotFound {
                code: school_year.to_string(),
            });
        }

        let workloads = inputs
            .iter()
            .filter(|input| input.employment.school_year == school_year)
            .filter(|input| division.is_none_or(|d| input.employment.division == d))
            .map(|input| self.workload(input))
            .collect::<EngineResult<Vec<_>>>()?;

        let total_percent: Decimal = workloads
            .iter()
            .map(|w| w.summary().percent_with_age_relief)
            .sum();
        let total_payment: Decimal = workloads.iter().map(|w| w.summary().payment).sum();
        let total_balance_change: Decimal = workloads
            .iter()
            .map(|w| w.summary().balance_change)
            .sum();

        Ok(Workloads {
            school_year: school_year.to_string(),
            division: division.map(str::to_string),
            workloads,
            total_percent,
            total_payment,
            total_balance_change,
        })
    }
}
