//! Request and response bodies for the Workload Calculation Engine API.
//!
//! `POST /workload` takes a bare [`WorkloadInput`]; the batched and balance
//! endpoints wrap several inputs.

use serde::{Deserialize, Serialize};

use crate::calculation::BalanceUpdate;
use crate::models::{Employment, WorkloadInput};

/// Request body for the `/workloads` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateWorkloadsRequest {
    /// Code of the school year to calculate.
    pub school_year: String,
    /// Restricts the result to employments of this division.
    #[serde(default)]
    pub division: Option<String>,
    /// One snapshot per teacher.
    #[serde(default)]
    pub inputs: Vec<WorkloadInput>,
}

/// Request body for the `/balances/recalculate` endpoint.
///
/// `inputs` holds one snapshot per school year of the teacher. The
/// employment of each snapshot seeds the balance ledger; its opening balance
/// is overwritten by the carry-forward from the previous year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateBalancesRequest {
    /// The teacher whose balances are recalculated.
    pub teacher_id: String,
    /// The first school year to recalculate.
    pub from_school_year: String,
    /// The teacher's snapshots, one per school year.
    #[serde(default)]
    pub inputs: Vec<WorkloadInput>,
}

/// Response body for the `/balances/recalculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateBalancesResponse {
    /// One update per recalculated school year, oldest first.
    pub updates: Vec<BalanceUpdate>,
    /// The teacher's employments after recalculation.
    pub employments: Vec<Employment>,
}
