//! HTTP API module for the Workload Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating teacher
//! workloads and recalculating balances across school years.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculateWorkloadsRequest, RecalculateBalancesRequest, RecalculateBalancesResponse,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
