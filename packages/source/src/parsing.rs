//! Shared parsing utilities for GeoJSON feature properties.
//!
//! The county asset is inconsistent about numeric types: counts and
//! rates appear both as JSON numbers and as numeric strings, so every
//! accessor accepts either shape.

use serde_json::Value;

/// Parses a property as a non-negative integer. Accepts JSON numbers and
/// numeric strings. Returns `None` if missing, non-numeric, or negative.
#[must_use]
pub fn parse_u64(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<u64>().ok()))
}

/// Parses a property as a float. Accepts JSON numbers and numeric
/// strings. Returns `None` if missing or non-numeric.
#[must_use]
pub fn parse_f64(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
}

/// Parses a property as a non-empty string.
#[must_use]
pub fn parse_string(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parses a Bundesland identifier property into a two-digit AGS code.
///
/// The asset carries `bl_id` either as a string (`"09"`, sometimes
/// unpadded `"9"`) or as a JSON number; all of these normalize to the
/// zero-padded form the state tables use.
#[must_use]
pub fn parse_state_code(value: Option<&Value>) -> Option<String> {
    let value = value?;
    if let Some(n) = value.as_u64() {
        return Some(format!("{n:02}"));
    }
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<u64>().ok().map(|n| format!("{n:02}"))
}
