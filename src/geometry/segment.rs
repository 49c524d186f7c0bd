use crate::math::{distance, Point2, PARALLEL_EPSILON, SNAP_TOLERANCE};

/// An immutable directed line segment from `p1` to `p2`.
///
/// The segment is stored as the implicit line `a·x + b·y = c` together with
/// the axis-aligned bounding box of its endpoints, which is all the
/// intersection test needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
    a: f64,
    b: f64,
    c: f64,
    min: Point2,
    max: Point2,
}

impl Segment {
    /// Creates a segment between two points.
    ///
    /// Coincident endpoints are accepted; such a segment never intersects
    /// anything since its coefficients vanish.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = a * p1.x + b * p1.y;
        Self {
            p1,
            p2,
            a,
            b,
            c,
            min: Point2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Returns the line coefficients `(a, b, c)` of `a·x + b·y = c`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.p1, &self.p2)
    }

    /// Tests whether `pt` lies inside the bounding box of this segment,
    /// inflated by [`SNAP_TOLERANCE`] on each axis.
    #[must_use]
    pub fn in_range(&self, pt: &Point2) -> bool {
        self.min.x <= pt.x + SNAP_TOLERANCE
            && pt.x - SNAP_TOLERANCE <= self.max.x
            && self.min.y <= pt.y + SNAP_TOLERANCE
            && pt.y - SNAP_TOLERANCE <= self.max.y
    }

    /// Intersects this segment with `other`.
    ///
    /// Parallel segments, collinear overlap included, never intersect.
    /// Otherwise the line-line intersection point is returned if it lies
    /// within both segments' tolerance-inflated bounding boxes.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<Point2> {
        let det = self.a * other.b - other.a * self.b;
        let scale = (self.a * other.b).abs() + (other.a * self.b).abs();
        if det.abs() <= PARALLEL_EPSILON * scale {
            return None;
        }

        let pt = Point2::new(
            (other.b * self.c - self.b * other.c) / det,
            (self.a * other.c - other.a * self.c) / det,
        );
        (self.in_range(&pt) && other.in_range(&pt)).then_some(pt)
    }
}

/// Builds one segment per consecutive pair of `points`.
///
/// If `closed` is true and there are more than two points, a final segment
/// from the last point back to the first is appended. The position of a
/// segment in the result is its edge index.
#[must_use]
pub fn edges_of(points: &[Point2], closed: bool) -> Vec<Segment> {
    let mut edges: Vec<Segment> = points
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .collect();
    if closed && points.len() > 2 {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            edges.push(Segment::new(last, first));
        }
    }
    edges
}
