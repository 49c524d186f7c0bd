use std::f64::consts::{FRAC_PI_6, PI};

use crate::error::{GeometryError, Result};
use crate::geometry::isosceles_base;
use crate::math::Point2;

/// Parameters of the initial folded triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldParams {
    apex: Point2,
    height: f64,
    vertex_angle: f64,
}

impl FoldParams {
    /// Creates fold parameters.
    ///
    /// * `apex` - Position of the vertex where the two equal sides meet.
    /// * `height` - Distance from the apex to the base.
    /// * `vertex_angle` - Apex angle in radians; `π/6` gives a six-fold flake.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is not positive and finite, or if
    /// `vertex_angle` is outside `(0, π)`.
    pub fn new(apex: Point2, height: f64, vertex_angle: f64) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "height",
                value: height,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if !(vertex_angle > 0.0 && vertex_angle < PI) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "vertex_angle",
                value: vertex_angle,
                min: 0.0,
                max: PI,
            }
            .into());
        }
        Ok(Self {
            apex,
            height,
            vertex_angle,
        })
    }

    /// Returns the apex position.
    #[must_use]
    pub fn apex(&self) -> Point2 {
        self.apex
    }

    /// Returns the triangle height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the apex angle in radians.
    #[must_use]
    pub fn vertex_angle(&self) -> f64 {
        self.vertex_angle
    }

    /// Bounding box of the pristine triangle.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            height: self.height,
            base: isosceles_base(self.height, self.vertex_angle),
        }
    }
}

impl Default for FoldParams {
    fn default() -> Self {
        Self {
            apex: Point2::origin(),
            height: 100.0,
            vertex_angle: FRAC_PI_6,
        }
    }
}

/// Width and height of the unfolded-triangle bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Extent along the fold axis (apex to base).
    pub height: f64,
    /// Length of the base.
    pub base: f64,
}

/// Rule deciding whether a cut path may grow to a new point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Every intersection of the new segment with the existing path must be
    /// on the path's final segment, i.e. at the joint it grows from.
    #[default]
    FinalJointOnly,
    /// The new segment must intersect the existing path exactly once.
    ///
    /// Stricter: rejects extensions that touch the final segment at more
    /// than one computed point.
    SingleIntersection,
}
