//! Bar chart series: one bar per Bundesland, largest first.

use std::collections::BTreeMap;

use covid_map_aggregation_models::AggregateMetrics;
use covid_map_covid_models::{Metric, states};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One bar: a Bundesland and its value for the selected metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    /// Bundesland display name.
    pub name: String,
    /// The selected metric's value.
    pub value: f64,
}

/// Axis scale for the bar chart's value dimension.
///
/// Counts span four orders of magnitude between city states and
/// Nordrhein-Westfalen, so they get a symlog axis; the rate metrics stay
/// linear.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum ScaleKind {
    /// Linear axis.
    Linear,
    /// Symmetric log axis.
    Symlog,
}

impl ScaleKind {
    /// Picks the axis scale for a metric.
    #[must_use]
    pub const fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::DeathRate | Metric::CasesPer100k => Self::Linear,
            Metric::Population | Metric::Cases => Self::Symlog,
        }
    }
}

/// Builds the bar series for a metric, sorted by value descending.
#[must_use]
pub fn bar_series(
    state_aggregates: &BTreeMap<String, AggregateMetrics>,
    metric: Metric,
) -> Vec<BarDatum> {
    let mut series: Vec<BarDatum> = state_aggregates
        .iter()
        .map(|(state_id, metrics)| BarDatum {
            name: states::state_name(state_id).to_string(),
            value: metrics.get(metric),
        })
        .collect();

    series.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    series
}
