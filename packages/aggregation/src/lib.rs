#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for German COVID-19 county records.
//!
//! Consumes normalized [`CountyRecord`]s and derives per-Bundesland and
//! nationwide [`AggregateMetrics`] under metric-specific rules: plain
//! sums for population and cases, incidence derived from the summed
//! totals, and a configurable death-rate strategy. Pure and synchronous;
//! each run produces a fresh immutable snapshot.
//!
//! [`CountyRecord`]: covid_map_covid_models::CountyRecord
//! [`AggregateMetrics`]: covid_map_aggregation_models::AggregateMetrics

pub mod engine;

pub use engine::aggregate;

use thiserror::Error;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// A record violated a field invariant.
    #[error("Invalid record for county {county}: field `{field}` {message}")]
    InvalidRecord {
        /// Name of the offending county.
        county: String,
        /// The field that failed validation.
        field: &'static str,
        /// Description of what went wrong.
        message: String,
    },
}
