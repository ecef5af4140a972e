#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core domain types for German COVID-19 statistics.
//!
//! The dataset covers three administrative granularities: Bund (the
//! nation), Bundesland (16 states), and Kreis (counties, the finest
//! level). Counties are the only level present in the raw data; state
//! and national figures are derived by the aggregation crate.

pub mod states;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A normalized county (Kreis) record as produced by the feature source
/// adapter.
///
/// `population` and `cases` are unsigned by construction; the optional
/// rate fields carry whatever the source precomputed and are validated
/// by the aggregation engine before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRecord {
    /// Two-digit AGS code of the owning Bundesland (e.g. "09" for
    /// Bayern). Non-empty for every record the adapter emits.
    pub state_id: String,
    /// Human-readable Bundesland name, when the source carries one.
    pub state_name: Option<String>,
    /// County name (e.g. "LK München").
    pub name: String,
    /// Residents (`ewz` in the source asset).
    pub population: u64,
    /// Recorded case count.
    pub cases: u64,
    /// Recorded death count, when the source carries one.
    pub deaths: Option<u64>,
    /// Precomputed county death rate as a percentage (0-100).
    pub death_rate: Option<f64>,
    /// Precomputed county incidence per 100,000 residents. Display-only;
    /// aggregates derive their own value from summed totals.
    pub cases_per_100k: Option<f64>,
}

impl CountyRecord {
    /// Returns the county's own value for the given metric, the way the
    /// Kreis map colors features. `None` when the source did not carry
    /// the precomputed rate (such features fall back to the neutral
    /// fill).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Population => Some(self.population as f64),
            Metric::DeathRate => self.death_rate,
            Metric::Cases => Some(self.cases as f64),
            Metric::CasesPer100k => self.cases_per_100k,
        }
    }
}

/// The four metrics the sidebar can select for coloring and charting.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Metric {
    /// Total residents.
    #[strum(serialize = "Population")]
    Population,
    /// Death rate percentage.
    #[strum(serialize = "Death Rate")]
    DeathRate,
    /// Total recorded cases.
    #[strum(serialize = "Cases")]
    Cases,
    /// Cases per 100,000 residents.
    #[strum(serialize = "Cases per 100K")]
    CasesPer100k,
}

impl Metric {
    /// All metrics in sidebar display order.
    pub const ALL: [Self; 4] = [
        Self::Population,
        Self::DeathRate,
        Self::Cases,
        Self::CasesPer100k,
    ];

    /// The GeoJSON property key carrying this metric on a county feature.
    #[must_use]
    pub const fn property_key(self) -> &'static str {
        match self {
            Self::Population => "ewz",
            Self::DeathRate => "death_rate",
            Self::Cases => "cases",
            Self::CasesPer100k => "cases_per_100k",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_display_names() {
        assert_eq!(Metric::Population.to_string(), "Population");
        assert_eq!(Metric::DeathRate.to_string(), "Death Rate");
        assert_eq!(Metric::Cases.to_string(), "Cases");
        assert_eq!(Metric::CasesPer100k.to_string(), "Cases per 100K");
    }

    #[test]
    fn metric_parses_sidebar_labels() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.to_string().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn metric_rejects_unknown_label() {
        assert!("Recoveries".parse::<Metric>().is_err());
    }

    #[test]
    fn property_keys_match_asset_schema() {
        assert_eq!(Metric::Population.property_key(), "ewz");
        assert_eq!(Metric::DeathRate.property_key(), "death_rate");
        assert_eq!(Metric::Cases.property_key(), "cases");
        assert_eq!(Metric::CasesPer100k.property_key(), "cases_per_100k");
    }

    #[test]
    fn county_record_serde_roundtrip() {
        let record = CountyRecord {
            state_id: "09".to_string(),
            state_name: Some("Bayern".to_string()),
            name: "LK München".to_string(),
            population: 348_871,
            cases: 1_250,
            deaths: Some(32),
            death_rate: Some(2.56),
            cases_per_100k: Some(358.3),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"stateId\":\"09\""));
        let back: CountyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
