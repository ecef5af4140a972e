#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! County feature source adapter.
//!
//! A source obtains the raw county-level GeoJSON asset and normalizes
//! its feature properties into [`CountyRecord`]s. Loading happens once
//! per call with no retry; a failed load surfaces to the caller and
//! aggregation never starts on partial data.

pub mod geojson_asset;
pub mod normalize;
pub mod parsing;

pub use geojson_asset::{GeoJsonAssetSource, GeoJsonFileSource};

use async_trait::async_trait;
use covid_map_covid_models::CountyRecord;

/// Errors that can occur while loading county features.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed; the backing asset is unavailable.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// File read failed; the backing asset is unavailable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The asset is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The asset is valid JSON but not valid GeoJSON.
    #[error("GeoJSON parse error: {0}")]
    Geo(#[from] geojson::Error),

    /// The asset parsed but violates the expected record shape.
    #[error("Malformed asset: {message}")]
    Malformed {
        /// Description of what went wrong.
        message: String,
    },
}

/// Trait that all county feature sources implement.
///
/// Each source knows how to obtain its GeoJSON asset and normalize the
/// feature properties into the canonical [`CountyRecord`] shape. Sources
/// hold no mutable state; `load` may be re-invoked to obtain a fresh
/// snapshot.
#[async_trait]
pub trait CountySource: Send + Sync {
    /// Returns a unique identifier for this source (e.g. `"rki_kreise"`).
    fn id(&self) -> &str;

    /// Returns the human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetches and parses the asset, returning normalized county records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the asset cannot be fetched or does not
    /// conform to the expected shape.
    async fn load(&self) -> Result<Vec<CountyRecord>, SourceError>;
}
