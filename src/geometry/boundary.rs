use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{contains_point_2d, is_simple_2d, perimeter_2d, signed_area_2d};
use crate::math::{coincident, distance, Point2};

use super::segment::{edges_of, Segment};

/// A hit between a probe segment and one edge of a polygon or path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Position of the intersected edge in [`edges_of`] order.
    pub edge_index: usize,
    /// The intersection point.
    pub point: Point2,
}

/// Collects every intersection of `probe` with the edges built from `points`,
/// in edge-index order.
#[must_use]
pub fn intersect_edges(points: &[Point2], closed: bool, probe: &Segment) -> Vec<EdgeHit> {
    edges_of(points, closed)
        .iter()
        .enumerate()
        .filter_map(|(edge_index, edge)| {
            probe.intersect(edge).map(|point| EdgeHit { edge_index, point })
        })
        .collect()
}

/// The current cuttable shape: an implicitly closed, simple polygon.
///
/// Vertex order defines edge adjacency; edge `i` runs from vertex `i` to
/// vertex `i + 1` and the last edge closes back to vertex 0. Orientation is
/// not constrained.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPolygon {
    vertices: Vec<Point2>,
}

impl BoundaryPolygon {
    /// Creates a boundary polygon from an ordered vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 vertices, two consecutive
    /// vertices (wrap-around included) coincide, or two edges cross.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        let n = vertices.len();
        for i in 0..n {
            let (a, b) = (&vertices[i], &vertices[(i + 1) % n]);
            if coincident(a, b) {
                return Err(GeometryError::Degenerate(format!(
                    "vertices {i} and {} coincide at ({}, {})",
                    (i + 1) % n,
                    a.x,
                    a.y
                ))
                .into());
            }
        }
        if !is_simple_2d(&vertices) {
            return Err(GeometryError::Degenerate("polygon edges cross each other".into()).into());
        }
        Ok(Self { vertices })
    }

    /// Builds the isosceles triangle of a folded sheet.
    ///
    /// The apex (where the two equal sides meet) sits at `apex`, the triangle
    /// opens towards `+x` with the given `height`, and `vertex_angle` is the
    /// angle at the apex in radians. Vertices are
    /// `apex, apex + (height, base/2), apex + (height, -base/2)` with
    /// `base = 2·height·tan(vertex_angle / 2)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters produce a degenerate triangle.
    pub fn isosceles(apex: Point2, height: f64, vertex_angle: f64) -> Result<Self> {
        let half_base = isosceles_base(height, vertex_angle) * 0.5;
        Self::new(vec![
            apex,
            Point2::new(apex.x + height, apex.y + half_base),
            Point2::new(apex.x + height, apex.y - half_base),
        ])
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns an owned copy of the vertices.
    #[must_use]
    pub fn to_vertices(&self) -> Vec<Point2> {
        self.vertices.clone()
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Returns the number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a boundary has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the closed edge list.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        edges_of(&self.vertices, true)
    }

    /// All intersections of `segment` with the boundary, in edge-index order.
    #[must_use]
    pub fn intersect_all(&self, segment: &Segment) -> Vec<EdgeHit> {
        intersect_edges(&self.vertices, true, segment)
    }

    /// The lowest-indexed edge intersection of `segment`, if any.
    #[must_use]
    pub fn first_intersection(&self, segment: &Segment) -> Option<EdgeHit> {
        self.intersect_all(segment).into_iter().next()
    }

    /// The intersection of `segment` closest to `from`, if any.
    ///
    /// Ties keep the lowest edge index, so a segment crossing the boundary
    /// once yields the same hit as [`Self::first_intersection`].
    #[must_use]
    pub fn nearest_intersection(&self, segment: &Segment, from: &Point2) -> Option<EdgeHit> {
        self.intersect_all(segment).into_iter().fold(None, |best, hit| match best {
            Some(b) if distance(&b.point, from) <= distance(&hit.point, from) => Some(b),
            _ => Some(hit),
        })
    }

    /// Counts how many times the open polyline `path` crosses the boundary.
    ///
    /// `0` means the path has not entered the shape, `2` means it went in and
    /// back out once, and more than `2` is an ambiguous cut.
    #[must_use]
    pub fn count_crossings(&self, path: &[Point2]) -> usize {
        edges_of(path, false)
            .iter()
            .map(|segment| self.intersect_all(segment).len())
            .sum()
    }

    /// Returns the perimeter.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices, true)
    }

    /// Returns the unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    /// Even-odd containment test.
    #[must_use]
    pub fn contains(&self, pt: &Point2) -> bool {
        contains_point_2d(&self.vertices, pt)
    }
}

/// Base length of an isosceles triangle with the given height and apex angle.
#[must_use]
pub fn isosceles_base(height: f64, vertex_angle: f64) -> f64 {
    2.0 * height * (vertex_angle / 2.0).tan()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_6, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_triangle() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]).unwrap()
    }

    #[test]
    fn isosceles_vertices_at_origin() {
        let h = 90.0;
        let tri = BoundaryPolygon::isosceles(p(0.0, 0.0), h, FRAC_PI_6).unwrap();
        let base = 2.0 * h * (PI / 12.0).tan();
        let v = tri.vertices();
        assert_eq!(v.len(), 3);
        assert_abs_diff_eq!(v[0].x, 0.0);
        assert_abs_diff_eq!(v[0].y, 0.0);
        assert_abs_diff_eq!(v[1].x, h);
        assert_abs_diff_eq!(v[1].y, base / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2].x, h);
        assert_abs_diff_eq!(v[2].y, -base / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_too_few_vertices() {
        assert!(BoundaryPolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn rejects_coincident_neighbours() {
        let result = BoundaryPolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
        assert!(result.is_err());
        let wrap = BoundaryPolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)]);
        assert!(wrap.is_err());
    }

    #[test]
    fn rejects_bow_tie() {
        let result = BoundaryPolygon::new(vec![p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0), p(0.0, 4.0)]);
        assert!(matches!(
            result,
            Err(crate::error::FlakeError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn intersect_all_reports_edges_in_order() {
        let tri = unit_triangle();
        // Horizontal probe at y = 1 crosses edge 2 (x = 0) and edge 1 (hypotenuse).
        let hits = tri.intersect_all(&Segment::new(p(-1.0, 1.0), p(5.0, 1.0)));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].edge_index, 1);
        assert_abs_diff_eq!(hits[0].point.x, 3.0, epsilon = 1e-12);
        assert_eq!(hits[1].edge_index, 2);
        assert_abs_diff_eq!(hits[1].point.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn first_and_nearest_intersection() {
        let tri = unit_triangle();
        let probe = Segment::new(p(-1.0, 1.0), p(5.0, 1.0));
        assert_eq!(tri.first_intersection(&probe).unwrap().edge_index, 1);
        let near = tri.nearest_intersection(&probe, &p(-1.0, 1.0)).unwrap();
        assert_eq!(near.edge_index, 2);
    }

    #[test]
    fn no_intersection_outside() {
        let tri = unit_triangle();
        let probe = Segment::new(p(5.0, 5.0), p(6.0, 7.0));
        assert!(tri.intersect_all(&probe).is_empty());
        assert!(tri.first_intersection(&probe).is_none());
    }

    #[test]
    fn count_crossings_classifies_progress() {
        let tri = unit_triangle();
        let outside = p(-1.0, 1.0);
        let inside = p(1.0, 1.0);
        let out_again = p(1.0, -1.0);
        assert_eq!(tri.count_crossings(&[outside]), 0);
        assert_eq!(tri.count_crossings(&[outside, p(-1.0, 2.0)]), 0);
        assert_eq!(tri.count_crossings(&[outside, inside]), 1);
        assert_eq!(tri.count_crossings(&[outside, inside, out_again]), 2);
        assert_eq!(tri.count_crossings(&[outside, inside, out_again, p(2.0, 1.0)]), 3);
    }

    #[test]
    fn perimeter_area_and_containment() {
        let tri = unit_triangle();
        assert_abs_diff_eq!(tri.perimeter(), 8.0 + 32.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(tri.area(), 8.0, epsilon = 1e-12);
        assert!(tri.contains(&p(1.0, 1.0)));
        assert!(!tri.contains(&p(3.0, 3.0)));
    }
}
