use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Reflects a point sequence across a line.
pub struct Mirror {
    origin: Point2,
    direction: Vector2,
}

impl Mirror {
    /// Creates a new `Mirror` operation across the line through `origin`
    /// along `direction`.
    #[must_use]
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Mirror across the horizontal line through `pivot` (flips `y`).
    #[must_use]
    pub fn horizontal(pivot: Point2) -> Self {
        Self::new(pivot, Vector2::x())
    }

    /// Executes the reflection, returning the mirrored points.
    ///
    /// Mirroring reverses orientation: a counter-clockwise polygon comes out
    /// clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror direction is zero-length.
    pub fn execute(&self, points: &[Point2]) -> Result<Vec<Point2>> {
        let dir = self
            .direction
            .try_normalize(f64::EPSILON)
            .ok_or_else(|| GeometryError::Degenerate("mirror direction must be non-zero".into()))?;
        Ok(points
            .iter()
            .map(|p| {
                let v = p - self.origin;
                self.origin + dir * (2.0 * v.dot(&dir)) - v
            })
            .collect())
    }
}
