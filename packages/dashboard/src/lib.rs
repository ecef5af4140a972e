#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard composition root.
//!
//! Wires a county feature source to the aggregation engine: one load
//! per session, then a pure aggregation pass, then an immutable
//! snapshot the map tabs and charts read from. A failed load surfaces
//! before aggregation starts, so there is never partial aggregate state
//! to roll back.

use std::collections::BTreeMap;

use covid_map_aggregation::{AggregationError, aggregate};
use covid_map_aggregation_models::{AggregateMetrics, AggregationOptions, CountryAggregates};
use covid_map_covid_models::{CountyRecord, Metric};
use covid_map_source::{CountySource, SourceError};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Errors that can occur while building the dashboard snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The county source failed to load.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Aggregation rejected the loaded records.
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),
}

/// The three map tabs, from coarsest to finest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Granularity {
    /// The national outline, no subdivisions.
    #[default]
    Bund,
    /// The 16 Bundesländer.
    Bundesland,
    /// Counties, the finest granularity in the dataset.
    Kreis,
}

/// An immutable dashboard snapshot: the loaded county records plus the
/// aggregates derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    records: Vec<CountyRecord>,
    aggregates: CountryAggregates,
}

impl Dashboard {
    /// Loads the source once and aggregates the result.
    ///
    /// Re-invoking replaces the entire snapshot; there is no incremental
    /// recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the load fails or aggregation
    /// rejects a record under the configured abort policy.
    pub async fn load(
        source: &dyn CountySource,
        options: &AggregationOptions,
    ) -> Result<Self, DashboardError> {
        log::info!("Loading dashboard data from source `{}`", source.id());

        let records = source.load().await?;
        let aggregates = aggregate(&records, options)?;

        log::info!(
            "Dashboard ready: {} counties, {} states",
            records.len(),
            aggregates.states.len()
        );

        Ok(Self {
            records,
            aggregates,
        })
    }

    /// The county records backing the Kreis view.
    #[must_use]
    pub fn counties(&self) -> &[CountyRecord] {
        &self.records
    }

    /// Per-Bundesland aggregates, keyed by AGS code.
    #[must_use]
    pub const fn states(&self) -> &BTreeMap<String, AggregateMetrics> {
        &self.aggregates.states
    }

    /// The nationwide aggregate.
    #[must_use]
    pub const fn national(&self) -> &AggregateMetrics {
        &self.aggregates.national
    }

    /// A Bundesland's value for the selected metric, `None` for unknown
    /// state codes.
    #[must_use]
    pub fn state_metric(&self, state_id: &str, metric: Metric) -> Option<f64> {
        self.aggregates
            .states
            .get(state_id)
            .map(|metrics| metrics.get(metric))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use covid_map_aggregation_models::AggregationOptions;
    use covid_map_covid_models::{CountyRecord, Metric};
    use covid_map_source::{CountySource, SourceError};

    use super::{Dashboard, DashboardError, Granularity};

    struct StubSource {
        records: Vec<CountyRecord>,
    }

    #[async_trait]
    impl CountySource for StubSource {
        fn id(&self) -> &'static str {
            "stub"
        }

        fn name(&self) -> &'static str {
            "Stub source"
        }

        async fn load(&self) -> Result<Vec<CountyRecord>, SourceError> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CountySource for FailingSource {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn name(&self) -> &'static str {
            "Failing source"
        }

        async fn load(&self) -> Result<Vec<CountyRecord>, SourceError> {
            Err(SourceError::Malformed {
                message: "asset is not a FeatureCollection".to_string(),
            })
        }
    }

    fn county(state_id: &str, name: &str, population: u64, cases: u64) -> CountyRecord {
        CountyRecord {
            state_id: state_id.to_string(),
            state_name: None,
            name: name.to_string(),
            population,
            cases,
            deaths: None,
            death_rate: None,
            cases_per_100k: None,
        }
    }

    #[tokio::test]
    async fn load_aggregates_the_source_records() {
        let source = StubSource {
            records: vec![
                county("01", "SK Kiel", 246_794, 820),
                county("01", "SK Lübeck", 216_530, 610),
                county("09", "LK München", 348_871, 1_250),
            ],
        };

        let dashboard = Dashboard::load(&source, &AggregationOptions::default())
            .await
            .unwrap();

        assert_eq!(dashboard.counties().len(), 3);
        assert_eq!(dashboard.states().len(), 2);
        assert_eq!(dashboard.national().population, 812_195);
        assert_eq!(dashboard.national().cases, 2_680);
    }

    #[tokio::test]
    async fn state_metric_lookup() {
        let source = StubSource {
            records: vec![county("09", "LK München", 348_871, 1_250)],
        };

        let dashboard = Dashboard::load(&source, &AggregationOptions::default())
            .await
            .unwrap();

        let cases = dashboard.state_metric("09", Metric::Cases).unwrap();
        assert!((cases - 1_250.0).abs() < f64::EPSILON);
        assert!(dashboard.state_metric("99", Metric::Cases).is_none());
    }

    #[tokio::test]
    async fn stateless_records_never_reach_any_aggregate() {
        let source = StubSource {
            records: vec![
                county("01", "SK Kiel", 246_794, 820),
                county("", "Nirgendwo", 5_000_000, 77_777),
            ],
        };

        let dashboard = Dashboard::load(&source, &AggregationOptions::default())
            .await
            .unwrap();

        assert_eq!(dashboard.states().len(), 1);
        assert_eq!(dashboard.national().population, 246_794);
        assert_eq!(dashboard.national().cases, 820);
    }

    #[tokio::test]
    async fn failed_load_propagates_before_aggregation() {
        let err = Dashboard::load(&FailingSource, &AggregationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::Source(_)));
    }

    #[test]
    fn granularity_tab_labels() {
        assert_eq!(Granularity::Bund.to_string(), "bund");
        assert_eq!(Granularity::Bundesland.to_string(), "bundesland");
        assert_eq!(Granularity::Kreis.to_string(), "kreis");
        assert_eq!(Granularity::default(), Granularity::Bund);
    }
}
