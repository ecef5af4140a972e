//! Feature-collection normalization into [`CountyRecord`]s.
//!
//! The asset is a single curated snapshot, so shape violations on the
//! required numeric fields fail the whole load rather than silently
//! skewing the national totals downstream.

use covid_map_covid_models::{CountyRecord, states};
use geojson::{FeatureCollection, JsonObject};

use crate::SourceError;
use crate::parsing::{parse_f64, parse_state_code, parse_string, parse_u64};

/// Reads a required count property, failing with the property and county
/// name when it is missing, non-numeric, or negative.
fn require_u64(props: &JsonObject, key: &str, county: &str) -> Result<u64, SourceError> {
    match props.get(key) {
        None | Some(serde_json::Value::Null) => Err(SourceError::Malformed {
            message: format!("county \"{county}\": missing required property `{key}`"),
        }),
        value => parse_u64(value).ok_or_else(|| SourceError::Malformed {
            message: format!(
                "county \"{county}\": property `{key}` is not a non-negative number"
            ),
        }),
    }
}

/// Resolves the owning Bundesland of a feature.
///
/// Prefers the `bl_id` code; falls back to mapping the `bl` name through
/// the state tables. `None` when the feature carries neither.
fn state_identity(props: &JsonObject) -> Option<String> {
    parse_state_code(props.get("bl_id")).or_else(|| {
        parse_string(props.get("bl"))
            .and_then(|name| states::ags_for_name(&name))
            .map(str::to_string)
    })
}

/// Normalizes a county feature collection into [`CountyRecord`]s.
///
/// Features without a Bundesland identity are dropped with a warning and
/// excluded from the output entirely; they would be unassignable to any
/// state aggregate and the national policy excludes them as well.
///
/// # Errors
///
/// Returns [`SourceError::Malformed`] if a feature lacks a properties
/// object or its required count properties do not parse.
pub fn normalize_collection(
    collection: &FeatureCollection,
) -> Result<Vec<CountyRecord>, SourceError> {
    let mut records = Vec::with_capacity(collection.features.len());

    for feature in &collection.features {
        let Some(props) = &feature.properties else {
            return Err(SourceError::Malformed {
                message: "feature without a properties object".to_string(),
            });
        };

        let name = parse_string(props.get("name")).unwrap_or_else(|| "Unknown Kreis".to_string());

        let population = require_u64(props, "ewz", &name)?;
        let cases = require_u64(props, "cases", &name)?;

        let Some(state_id) = state_identity(props) else {
            log::warn!("Skipping county \"{name}\": no Bundesland identifier in `bl_id` or `bl`");
            continue;
        };

        let state_name = parse_string(props.get("bl"))
            .or_else(|| match states::state_name(&state_id) {
                "Unknown" => None,
                known => Some(known.to_string()),
            });

        records.push(CountyRecord {
            state_id,
            state_name,
            name,
            population,
            cases,
            deaths: parse_u64(props.get("deaths")),
            death_rate: parse_f64(props.get("death_rate")),
            cases_per_100k: parse_f64(props.get("cases_per_100k")),
        });
    }

    log::info!(
        "Normalized {} county records from {} features",
        records.len(),
        collection.features.len()
    );
    Ok(records)
}
