#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bounding box configuration and linear marker projection.
//!
//! Maps WGS84 coordinates into normalized `[0,1]x[0,1]` display space for
//! marker placement over a static map image. The projection is a plain
//! linear interpolation with no cartographic distortion correction; the
//! map view is a preview, not a survey instrument.

use farm_map_farm_models::GeoPoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while configuring a [`Projector`].
///
/// These are fatal at initialization: a projector with a degenerate box
/// would divide by zero on every point, so the box is validated once at
/// construction rather than per point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// The box has zero extent on at least one axis.
    #[error("degenerate bounding box: lat {lat_min}..{lat_max}, lng {lng_min}..{lng_max}")]
    DegenerateBounds {
        /// Southern edge.
        lat_min: f64,
        /// Northern edge.
        lat_max: f64,
        /// Western edge.
        lng_min: f64,
        /// Eastern edge.
        lng_max: f64,
    },

    /// At least one corner coordinate is NaN or infinite.
    #[error("bounding box coordinates must be finite")]
    NonFiniteBounds,
}

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Southern edge latitude.
    pub lat_min: f64,
    /// Northern edge latitude.
    pub lat_max: f64,
    /// Western edge longitude.
    pub lng_min: f64,
    /// Eastern edge longitude.
    pub lng_max: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its four edges.
    #[must_use]
    pub const fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// The demo region used by the simulated map background
    /// (roughly the Indian subcontinent).
    #[must_use]
    pub const fn demo_region() -> Self {
        Self::new(8.0, 37.0, 68.0, 97.0)
    }

    /// Whether a point lies inside the box (inclusive on all edges).
    ///
    /// Renderers use this to clip markers that [`Projector::project`]
    /// places outside the unit square.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lng_min..=self.lng_max).contains(&lng)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::demo_region()
    }
}

/// A projected marker position in normalized display space.
///
/// `x` grows eastward, `y` grows southward (screen convention). Values
/// are in `[0,1]` for in-bounds inputs and outside it otherwise; this
/// type is derived and ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Horizontal position, `0.0` at the western edge.
    pub x: f64,
    /// Vertical position, `0.0` at the northern edge.
    pub y: f64,
}

/// Projects geographic coordinates into normalized display space over a
/// fixed bounding box.
///
/// Constructed once per map view. Construction fails on a degenerate or
/// non-finite box; after that, projection is infallible.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    bounds: BoundingBox,
    lat_span: f64,
    lng_span: f64,
}

impl Projector {
    /// Validates the bounding box and builds a projector.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::NonFiniteBounds`] if any edge is NaN or
    /// infinite, and [`ProjectionError::DegenerateBounds`] if either axis
    /// has zero extent.
    pub fn new(bounds: BoundingBox) -> Result<Self, ProjectionError> {
        let edges = [
            bounds.lat_min,
            bounds.lat_max,
            bounds.lng_min,
            bounds.lng_max,
        ];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(ProjectionError::NonFiniteBounds);
        }

        let lat_span = bounds.lat_max - bounds.lat_min;
        let lng_span = bounds.lng_max - bounds.lng_min;
        if lat_span == 0.0 || lng_span == 0.0 {
            return Err(ProjectionError::DegenerateBounds {
                lat_min: bounds.lat_min,
                lat_max: bounds.lat_max,
                lng_min: bounds.lng_min,
                lng_max: bounds.lng_max,
            });
        }

        Ok(Self {
            bounds,
            lat_span,
            lng_span,
        })
    }

    /// The bounding box this projector was built with.
    #[must_use]
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Projects a latitude/longitude pair into display space.
    ///
    /// Inputs outside the bounding box are not clamped; they project
    /// outside `[0,1]` and the caller clips them.
    #[must_use]
    pub fn project(&self, lat: f64, lng: f64) -> ProjectedPoint {
        ProjectedPoint {
            x: (lng - self.bounds.lng_min) / self.lng_span,
            y: 1.0 - (lat - self.bounds.lat_min) / self.lat_span,
        }
    }

    /// Projects a [`GeoPoint`].
    #[must_use]
    pub fn project_point(&self, point: GeoPoint) -> ProjectedPoint {
        self.project(point.lat, point.lng)
    }
}
