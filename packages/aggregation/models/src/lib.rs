#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregate output and configuration types for the aggregation engine.
//!
//! Aggregates are pure derived values: the engine recomputes them from
//! scratch on every run and callers receive immutable snapshots with no
//! identity beyond the run that produced them.

use std::collections::BTreeMap;

use covid_map_covid_models::Metric;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Derived summary metrics for one geographic unit (a Bundesland or the
/// whole Bund).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    /// Total residents over contributing counties.
    pub population: u64,
    /// Total recorded cases over contributing counties.
    pub cases: u64,
    /// Death rate percentage; semantics depend on the configured
    /// [`DeathRateStrategy`]. `0.0` for zero-population aggregates.
    pub death_rate: f64,
    /// Cases per 100,000 residents, derived from the summed totals.
    /// `0.0` for zero-population aggregates.
    pub cases_per_100k: f64,
}

impl AggregateMetrics {
    /// The all-zero aggregate (what an empty record set produces).
    pub const ZERO: Self = Self {
        population: 0,
        cases: 0,
        death_rate: 0.0,
        cases_per_100k: 0.0,
    };

    /// Returns the value of the given metric as an `f64`, the shape the
    /// color scales and chart series consume.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Population => self.population as f64,
            Metric::DeathRate => self.death_rate,
            Metric::Cases => self.cases as f64,
            Metric::CasesPer100k => self.cases_per_100k,
        }
    }
}

/// One aggregation run's complete output: a per-Bundesland mapping plus
/// the nationwide aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAggregates {
    /// Bundesland aggregates keyed by two-digit AGS code.
    pub states: BTreeMap<String, AggregateMetrics>,
    /// The nationwide (Bund) aggregate.
    pub national: AggregateMetrics,
}

/// How the aggregate death rate is computed.
///
/// Both strategies shipped at some point in the dashboard's history, so
/// both are preserved as named configuration rather than silently
/// reconciled.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeathRateStrategy {
    /// `Σ(county rate · county population) / Σ(county population)`:
    /// each county's precomputed rate weighted by its population.
    #[default]
    PopulationWeighted,
    /// `(cases / population) · 100` over the aggregate totals. This is a
    /// mislabeled cases-rate rather than a true death rate; it is kept
    /// because one revision shipped it deliberately.
    CasesRatio,
}

/// What the engine does with a record that fails validation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvalidRecordPolicy {
    /// Drop the offending record from every aggregate and continue.
    #[default]
    Skip,
    /// Fail the whole run with no partial output.
    Abort,
}

/// Configuration for one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationOptions {
    /// Death rate computation strategy.
    pub death_rate_strategy: DeathRateStrategy,
    /// Invalid record handling.
    pub invalid_records: InvalidRecordPolicy,
}
