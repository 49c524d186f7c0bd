use nalgebra::Rotation2;

use crate::math::Point2;

/// Rotates a point sequence about a center.
pub struct Rotate {
    center: Point2,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Counter-clockwise rotation angle in radians.
    #[must_use]
    pub fn new(center: Point2, angle: f64) -> Self {
        Self { center, angle }
    }

    /// Executes the rotation, returning the rotated points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let rotation = Rotation2::new(self.angle);
        points
            .iter()
            .map(|p| self.center + rotation * (p - self.center))
            .collect()
    }
}
