//! The aggregation pass: partition county records by Bundesland and
//! reduce each partition (plus the full set, nationwide) to
//! [`AggregateMetrics`].

use std::collections::BTreeMap;

use covid_map_aggregation_models::{
    AggregateMetrics, AggregationOptions, CountryAggregates, DeathRateStrategy,
    InvalidRecordPolicy,
};
use covid_map_covid_models::CountyRecord;

use crate::AggregationError;

/// Running totals for one partition (a Bundesland or the nation).
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    population: u64,
    cases: u64,
    /// `Σ(county death rate · county population)`, the weighted-strategy
    /// numerator. Counties without a precomputed rate contribute nothing
    /// here while their population still lands in the denominator.
    rate_weighted_sum: f64,
}

impl Totals {
    #[allow(clippy::cast_precision_loss)]
    fn add(&mut self, record: &CountyRecord) {
        self.population += record.population;
        self.cases += record.cases;
        if let Some(rate) = record.death_rate {
            self.rate_weighted_sum += rate * record.population as f64;
        }
    }

    /// Reduces the totals to final metrics. Incidence is always derived
    /// from the summed totals, never from per-county precomputed values;
    /// zero-population partitions yield zero for both derived metrics.
    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, strategy: DeathRateStrategy) -> AggregateMetrics {
        let population = self.population as f64;
        let cases = self.cases as f64;

        let cases_per_100k = if self.population > 0 {
            (cases / population) * 100_000.0
        } else {
            0.0
        };

        let death_rate = if self.population == 0 {
            0.0
        } else {
            match strategy {
                DeathRateStrategy::PopulationWeighted => self.rate_weighted_sum / population,
                DeathRateStrategy::CasesRatio => (cases / population) * 100.0,
            }
        };

        AggregateMetrics {
            population: self.population,
            cases: self.cases,
            death_rate,
            cases_per_100k,
        }
    }
}

/// Validates the floating-point rate fields of a record.
///
/// `population` and `cases` are `u64`, so their non-negativity needs no
/// runtime check; the precomputed rates are the fields that can arrive
/// broken (NaN, infinities, negatives).
fn validate(record: &CountyRecord) -> Result<(), AggregationError> {
    let checks: [(&'static str, Option<f64>); 2] = [
        ("deathRate", record.death_rate),
        ("casesPer100k", record.cases_per_100k),
    ];

    for (field, value) in checks {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(AggregationError::InvalidRecord {
                    county: record.name.clone(),
                    field,
                    message: format!("is not finite ({value})"),
                });
            }
            if value < 0.0 {
                return Err(AggregationError::InvalidRecord {
                    county: record.name.clone(),
                    field,
                    message: format!("is negative ({value})"),
                });
            }
        }
    }

    Ok(())
}

/// Aggregates county records into per-Bundesland and nationwide metrics.
///
/// Records with an empty `state_id` are excluded from both the state
/// mapping and the national aggregate. Invalid records are skipped with
/// a warning or abort the run, per `options.invalid_records`.
///
/// Calling this twice on the same input yields identical output; the
/// result holds no connection to the input beyond its values.
///
/// # Errors
///
/// Returns [`AggregationError::InvalidRecord`] under
/// [`InvalidRecordPolicy::Abort`] when a record's rate fields are
/// non-finite or negative.
pub fn aggregate(
    records: &[CountyRecord],
    options: &AggregationOptions,
) -> Result<CountryAggregates, AggregationError> {
    let mut state_totals: BTreeMap<String, Totals> = BTreeMap::new();
    let mut national_totals = Totals::default();

    for record in records {
        if let Err(e) = validate(record) {
            match options.invalid_records {
                InvalidRecordPolicy::Skip => {
                    log::warn!("Skipping invalid county record: {e}");
                    continue;
                }
                InvalidRecordPolicy::Abort => return Err(e),
            }
        }

        if record.state_id.is_empty() {
            log::warn!(
                "Skipping county \"{}\": no Bundesland identifier",
                record.name
            );
            continue;
        }

        state_totals
            .entry(record.state_id.clone())
            .or_default()
            .add(record);
        national_totals.add(record);
    }

    let states = state_totals
        .into_iter()
        .map(|(state_id, totals)| (state_id, totals.finish(options.death_rate_strategy)))
        .collect();

    Ok(CountryAggregates {
        states,
        national: national_totals.finish(options.death_rate_strategy),
    })
}
