//! Workload Calculation Engine for teacher employment
//!
//! This crate computes a teacher's workload for a school year from their
//! course assignments, pool bookings, postings and thesis supervisions,
//! applies age relief, compares the result against the employment's payment
//! and carries the resulting balance into the following school year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
