use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::{Mirror, Rotate, Translate};

/// Lays out the unfolded snowflake from its folded wedge.
///
/// The folded shape is copied once per wedge around the apex: section `i`
/// is rotated by `i · vertex_angle` about the apex and every odd section is
/// mirrored first, the way a folded sheet opens up.
pub struct Unfold {
    apex: Point2,
    vertex_angle: f64,
    center: Point2,
}

impl Unfold {
    /// Creates a new `Unfold` operation around `apex`.
    #[must_use]
    pub fn new(apex: Point2, vertex_angle: f64) -> Self {
        Self {
            apex,
            vertex_angle,
            center: apex,
        }
    }

    /// Places the unfolded flake's center at `center` instead of the apex.
    #[must_use]
    pub fn centered_at(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    /// Number of wedges needed to go all the way around.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn section_count(&self) -> usize {
        // Shave off rounding noise so 2π / (π/6) stays 12.
        (TAU / self.vertex_angle - 1e-9).ceil().max(1.0) as usize
    }

    /// Executes the unfold, returning one polygon per section.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex angle is not positive and finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, folded: &[Point2]) -> Result<Vec<Vec<Point2>>> {
        if !self.vertex_angle.is_finite() || self.vertex_angle <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "vertex_angle",
                value: self.vertex_angle,
                min: 0.0,
                max: TAU,
            }
            .into());
        }

        let flipped = Mirror::horizontal(self.apex).execute(folded)?;
        let shift = Translate::new(self.center - self.apex);

        Ok((0..self.section_count())
            .map(|i| {
                let base = if i % 2 == 1 { flipped.as_slice() } else { folded };
                let rotated = Rotate::new(self.apex, i as f64 * self.vertex_angle).execute(base);
                shift.execute(&rotated)
            })
            .collect())
    }
}
