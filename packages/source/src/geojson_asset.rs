//! GeoJSON asset sources.
//!
//! The production asset is a static file served next to the dashboard
//! (`covid-19-germany-landkreise.geojson`); [`GeoJsonAssetSource`]
//! fetches it over HTTP while [`GeoJsonFileSource`] reads the same shape
//! from disk for offline use and tests.

use std::path::PathBuf;

use async_trait::async_trait;
use covid_map_covid_models::CountyRecord;
use geojson::{FeatureCollection, GeoJson};

use crate::normalize::normalize_collection;
use crate::{CountySource, SourceError};

/// Parses an asset body as a GeoJSON `FeatureCollection`.
fn parse_collection(body: &str) -> Result<FeatureCollection, SourceError> {
    let geojson: GeoJson = body.parse()?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(SourceError::Malformed {
            message: "asset is not a FeatureCollection".to_string(),
        }),
    }
}

/// County source backed by an HTTP-served static GeoJSON asset.
pub struct GeoJsonAssetSource {
    url: String,
    client: reqwest::Client,
}

impl GeoJsonAssetSource {
    /// Creates a source for the asset at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CountySource for GeoJsonAssetSource {
    fn id(&self) -> &'static str {
        "geojson_asset"
    }

    fn name(&self) -> &'static str {
        "Static GeoJSON asset"
    }

    async fn load(&self) -> Result<Vec<CountyRecord>, SourceError> {
        log::info!("Fetching county asset from {}", self.url);

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let collection = parse_collection(&body)?;
        normalize_collection(&collection)
    }
}

/// County source backed by a GeoJSON file on disk.
pub struct GeoJsonFileSource {
    path: PathBuf,
}

impl GeoJsonFileSource {
    /// Creates a source for the asset at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CountySource for GeoJsonFileSource {
    fn id(&self) -> &'static str {
        "geojson_file"
    }

    fn name(&self) -> &'static str {
        "Local GeoJSON file"
    }

    async fn load(&self) -> Result<Vec<CountyRecord>, SourceError> {
        log::info!("Reading county asset from {}", self.path.display());

        let body = std::fs::read_to_string(&self.path)?;
        let collection = parse_collection(&body)?;
        normalize_collection(&collection)
    }
}
