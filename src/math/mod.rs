pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for geometric membership tests (bounding boxes, coincident
/// vertices). Points are never compared for exact equality.
pub const SNAP_TOLERANCE: f64 = 0.01;

/// Relative threshold below which a 2x2 determinant is treated as zero.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns `true` if the points lie within [`SNAP_TOLERANCE`] of each other
/// on both axes.
#[must_use]
pub fn coincident(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() <= SNAP_TOLERANCE && (a.y - b.y).abs() <= SNAP_TOLERANCE
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn distance_3_4_5() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn coincident_within_tolerance() {
        assert!(coincident(&Point2::new(1.0, 1.0), &Point2::new(1.005, 0.995)));
        assert!(!coincident(&Point2::new(1.0, 1.0), &Point2::new(1.02, 1.0)));
    }
}
