use nalgebra::Translation2;

use crate::math::{Point2, Vector2};

/// Moves a point sequence by a fixed offset.
pub struct Translate {
    offset: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(offset: Vector2) -> Self {
        Self { offset }
    }

    /// Executes the translation, returning the moved points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let translation = Translation2::from(self.offset);
        points.iter().map(|p| translation.transform_point(p)).collect()
    }
}
