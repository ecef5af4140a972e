#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart series preparation for the companion bar and pie charts.
//!
//! Turns the per-Bundesland aggregates into render-ready series: named
//! data points with the selected metric's value, ordering, scale choice,
//! and slice weighting precomputed. The drawing itself is a rendering
//! collaborator's concern.

pub mod bar;
pub mod pie;

pub use bar::{BarDatum, ScaleKind, bar_series};
pub use pie::{PieSlice, pie_series};
