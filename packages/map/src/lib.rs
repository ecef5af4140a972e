#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map view-model support for the rendering collaborators.
//!
//! Everything here is pure computation over values the aggregation layer
//! produced: choropleth color domains, the click-to-zoom transform, and
//! the explicit reset handle a map view hands its owner. Rendering
//! itself (SVG, tooltips, pan gestures) lives outside this workspace.

pub mod choropleth;
pub mod reset;
pub mod viewport;

pub use choropleth::value_domain;
pub use reset::ResetHandle;
pub use viewport::{Viewport, ZoomTransform};
