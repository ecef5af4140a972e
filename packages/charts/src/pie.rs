//! Pie chart series: one slice per Bundesland.
//!
//! Count metrics are `ln(1 + v)`-compressed for the angular weight so
//! Bremen stays visible next to Nordrhein-Westfalen, and a zero count
//! contributes a zero-width slice instead of a log-of-zero artifact.
//! The displayed value is always the raw one.

use std::collections::BTreeMap;

use covid_map_aggregation_models::AggregateMetrics;
use covid_map_covid_models::{Metric, states};
use serde::{Deserialize, Serialize};

/// One pie slice for a Bundesland.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    /// Bundesland display name.
    pub name: String,
    /// The metric's raw value, shown in the slice label.
    pub value: f64,
    /// The slice's angular weight.
    pub weight: f64,
}

/// The angular weight for a slice value under the given metric.
fn slice_weight(metric: Metric, value: f64) -> f64 {
    match metric {
        Metric::Cases | Metric::Population => value.ln_1p(),
        Metric::DeathRate | Metric::CasesPer100k => value,
    }
}

/// Builds the pie series for a metric, in state-code order.
#[must_use]
pub fn pie_series(
    state_aggregates: &BTreeMap<String, AggregateMetrics>,
    metric: Metric,
) -> Vec<PieSlice> {
    state_aggregates
        .iter()
        .map(|(state_id, metrics)| {
            let value = metrics.get(metric);
            PieSlice {
                name: states::state_name(state_id).to_string(),
                value,
                weight: slice_weight(metric, value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use covid_map_aggregation_models::AggregateMetrics;
    use covid_map_covid_models::Metric;

    use super::*;

    fn single_state(cases: u64, death_rate: f64) -> BTreeMap<String, AggregateMetrics> {
        let mut map = BTreeMap::new();
        map.insert(
            "09".to_string(),
            AggregateMetrics {
                population: 13_100_000,
                cases,
                death_rate,
                cases_per_100k: 0.0,
            },
        );
        map
    }

    #[test]
    fn count_metrics_are_log_compressed() {
        let series = pie_series(&single_state(5_000, 2.0), Metric::Cases);

        let slice = &series[0];
        assert_eq!(slice.name, "Bayern");
        assert!((slice.value - 5_000.0).abs() < f64::EPSILON);
        assert!((slice.weight - 5_000.0_f64.ln_1p()).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_count_yields_zero_weight_not_neg_infinity() {
        let series = pie_series(&single_state(0, 2.0), Metric::Cases);

        let slice = &series[0];
        assert!(slice.weight.abs() < f64::EPSILON);
        assert!(slice.weight.is_finite());
    }

    #[test]
    fn rate_metrics_keep_raw_weight() {
        let series = pie_series(&single_state(5_000, 2.0), Metric::DeathRate);

        let slice = &series[0];
        assert!((slice.weight - 2.0).abs() < f64::EPSILON);
        assert!((slice.weight - slice.value).abs() < f64::EPSILON);
    }

    #[test]
    fn one_slice_per_state() {
        let mut map = single_state(5_000, 2.0);
        map.insert(
            "11".to_string(),
            AggregateMetrics {
                population: 3_700_000,
                cases: 9_800,
                death_rate: 1.5,
                cases_per_100k: 264.9,
            },
        );

        let series = pie_series(&map, Metric::Population);
        assert_eq!(series.len(), 2);
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bayern", "Berlin"]);
    }
}
