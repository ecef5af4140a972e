//! Click-to-zoom viewport math.
//!
//! When a Bundesland or Kreis is clicked, the map zooms to fit the
//! feature's projected bounding box: the feature fills 90% of the
//! shorter viewport dimension, capped so small features do not zoom in
//! past readability.

/// Maximum zoom level when fitting a clicked feature.
pub const MAX_FEATURE_ZOOM: f64 = 4.0;

/// Fraction of the viewport a fitted feature occupies.
pub const FIT_RATIO: f64 = 0.9;

/// Scale extent for free (wheel/pinch) zooming.
pub const FREE_ZOOM_EXTENT: (f64, f64) = (1.0, 8.0);

/// A zoom/pan state: scale factor plus translation in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    /// Zoom scale factor.
    pub scale: f64,
    /// Translation applied after scaling.
    pub translate: [f64; 2],
}

impl ZoomTransform {
    /// The untransformed view; what a zoom reset restores.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: [0.0, 0.0],
    };
}

/// Fixed viewport dimensions of a rendered map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport. Dimensions must be positive.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Computes the transform that zooms onto a feature's projected
    /// bounds `[[x0, y0], [x1, y1]]`.
    ///
    /// Degenerate (point-like) bounds clamp to [`MAX_FEATURE_ZOOM`]
    /// centered on the point.
    #[must_use]
    pub fn zoom_to_bounds(&self, bounds: [[f64; 2]; 2]) -> ZoomTransform {
        let [[x0, y0], [x1, y1]] = bounds;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let cx = f64::midpoint(x0, x1);
        let cy = f64::midpoint(y0, y1);

        let extent_ratio = (dx / self.width).max(dy / self.height);
        let scale = if extent_ratio > 0.0 {
            (FIT_RATIO / extent_ratio).min(MAX_FEATURE_ZOOM)
        } else {
            MAX_FEATURE_ZOOM
        };

        ZoomTransform {
            scale,
            translate: [
                self.width / 2.0 - scale * cx,
                self.height / 2.0 - scale * cy,
            ],
        }
    }

    /// The transform a zoom reset restores.
    #[must_use]
    pub const fn reset(&self) -> ZoomTransform {
        ZoomTransform::IDENTITY
    }
}
