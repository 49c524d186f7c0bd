use tracing::{debug, warn};

use crate::error::{CutError, Result};
use crate::geometry::{BoundaryPolygon, EdgeHit, Segment};
use crate::math::polygon_2d::{dedup_consecutive_2d, is_simple_2d, perimeter_2d};
use crate::math::{coincident, distance, Point2};

/// Outcome of a resolved cut.
#[derive(Debug, Clone, PartialEq)]
pub struct CutResolution {
    /// The piece that stays, i.e. the larger-perimeter option.
    pub kept: BoundaryPolygon,
    /// Vertices of the piece that falls away.
    pub offcut: Vec<Point2>,
    /// `true` if the kept piece is the boundary with the cut spliced in,
    /// `false` if it is the complementary piece.
    pub kept_spliced: bool,
}

/// Splits a boundary polygon along a cut path and keeps one piece.
///
/// The cut's first and last segments must each cross the boundary. Their
/// crossings replace the cut's endpoints, the boundary vertices strictly
/// between the two crossed edges are spliced out, and of the two resulting
/// closed polygons the one with the strictly larger perimeter is kept
/// (ties keep the spliced boundary).
pub struct ResolveCut {
    cut: Vec<Point2>,
}

impl ResolveCut {
    /// Creates a new `ResolveCut` operation for the given cut points.
    #[must_use]
    pub fn new(cut: Vec<Point2>) -> Self {
        Self { cut }
    }

    /// Executes the cut against `boundary`. The boundary is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`CutError::TooFewPoints`] for fewer than 2 cut points,
    /// [`CutError::Unresolvable`] if either end segment misses the boundary
    /// (or both ends land on the same crossing), and
    /// [`CutError::DegenerateResult`] if the kept piece collapses below
    /// 3 vertices, and [`CutError::NonSimpleResult`] if its edges would
    /// cross (a path that leaves and re-enters the shape).
    pub fn execute(&self, boundary: &BoundaryPolygon) -> Result<CutResolution> {
        let n = self.cut.len();
        if n < 2 {
            return Err(CutError::TooFewPoints { count: n }.into());
        }

        let first = Segment::new(self.cut[0], self.cut[1]);
        let last = Segment::new(self.cut[n - 2], self.cut[n - 1]);
        let start = boundary.nearest_intersection(&first, &self.cut[0]);
        let end = boundary.nearest_intersection(&last, &self.cut[n - 1]);
        let (Some(start), Some(end)) = (start, end) else {
            warn!(
                start_hit = start.is_some(),
                end_hit = end.is_some(),
                "cut does not intersect boundary on both ends"
            );
            return Err(CutError::Unresolvable.into());
        };
        if coincident(&start.point, &end.point) {
            warn!("cut enters and leaves the boundary at the same point");
            return Err(CutError::Unresolvable.into());
        }

        // Trim the overshoot so only the part inside the boundary is used.
        let mut cut = self.cut.clone();
        cut[0] = start.point;
        cut[n - 1] = end.point;

        let vertices = boundary.vertices();
        let splice_start = start.edge_index.min(end.edge_index) + 1;
        let splice_len = start.edge_index.abs_diff(end.edge_index);

        if needs_reversal(vertices, &cut, &start, &end) {
            cut.reverse();
        }

        let removed = &vertices[splice_start..splice_start + splice_len];

        let mut spliced = Vec::with_capacity(vertices.len() - splice_len + cut.len());
        spliced.extend_from_slice(&vertices[..splice_start]);
        spliced.extend_from_slice(&cut);
        spliced.extend_from_slice(&vertices[splice_start + splice_len..]);
        let spliced = dedup_consecutive_2d(&spliced);

        let mut complement: Vec<Point2> = cut.iter().rev().copied().collect();
        complement.extend_from_slice(removed);
        let complement = dedup_consecutive_2d(&complement);

        let spliced_perimeter = perimeter_2d(&spliced, true);
        let complement_perimeter = perimeter_2d(&complement, true);
        let kept_spliced = spliced_perimeter >= complement_perimeter;
        debug!(
            start_edge = start.edge_index,
            end_edge = end.edge_index,
            spliced_perimeter,
            complement_perimeter,
            kept_spliced,
            "resolved cut"
        );

        let (kept, offcut) = if kept_spliced {
            (spliced, complement)
        } else {
            (complement, spliced)
        };
        let count = kept.len();
        if count >= 3 && !is_simple_2d(&kept) {
            warn!(vertices = count, "cut would leave a self-intersecting shape");
            return Err(CutError::NonSimpleResult.into());
        }
        let kept = BoundaryPolygon::new(kept).map_err(|_| CutError::DegenerateResult {
            vertices: count,
        })?;

        Ok(CutResolution {
            kept,
            offcut,
            kept_spliced,
        })
    }
}

/// The cut must run from the lower-indexed crossed edge to the higher one.
/// When both ends cross the same edge, the end farther from that edge's
/// start vertex goes last.
fn needs_reversal(vertices: &[Point2], cut: &[Point2], start: &EdgeHit, end: &EdgeHit) -> bool {
    if end.edge_index != start.edge_index {
        return end.edge_index < start.edge_index;
    }
    let anchor = &vertices[start.edge_index];
    match (cut.first(), cut.last()) {
        (Some(first), Some(last)) => distance(first, anchor) > distance(last, anchor),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::FlakeError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn triangle() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]).unwrap()
    }

    fn assert_vertices(actual: &[Point2], expected: &[Point2]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn too_few_points() {
        let err = ResolveCut::new(vec![p(1.0, 1.0)]).execute(&triangle()).unwrap_err();
        assert!(matches!(err, FlakeError::Cut(CutError::TooFewPoints { count: 1 })));
    }

    #[test]
    fn cut_missing_the_boundary_is_unresolvable() {
        let err = ResolveCut::new(vec![p(5.0, 5.0), p(6.0, 5.0)])
            .execute(&triangle())
            .unwrap_err();
        assert!(matches!(err, FlakeError::Cut(CutError::Unresolvable)));
    }

    #[test]
    fn cut_ending_inside_is_unresolvable() {
        let err = ResolveCut::new(vec![p(-1.0, 1.0), p(1.0, 1.0), p(1.5, 1.0)])
            .execute(&triangle())
            .unwrap_err();
        assert!(matches!(err, FlakeError::Cut(CutError::Unresolvable)));
    }

    #[test]
    fn snipping_a_corner_keeps_the_quadrilateral() {
        let res = ResolveCut::new(vec![p(3.0, -1.0), p(3.0, 2.0)]).execute(&triangle()).unwrap();
        assert!(res.kept_spliced);
        assert_vertices(
            res.kept.vertices(),
            &[p(0.0, 0.0), p(3.0, 0.0), p(3.0, 1.0), p(0.0, 4.0)],
        );
        assert_vertices(&res.offcut, &[p(3.0, 1.0), p(3.0, 0.0), p(4.0, 0.0)]);
        assert!(res.kept.perimeter() > perimeter_2d(&res.offcut, true));
    }

    #[test]
    fn removing_the_apex_square_keeps_the_complement() {
        // Enters through edge 2, exits through edge 0: cut is reversed, the
        // spliced option is the small square at the origin.
        let res = ResolveCut::new(vec![p(-1.0, 1.0), p(1.0, 1.0), p(1.0, -1.0)])
            .execute(&triangle())
            .unwrap();
        assert!(!res.kept_spliced);
        assert_vertices(
            res.kept.vertices(),
            &[p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)],
        );
        assert_vertices(&res.offcut, &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
        assert!(is_simple_2d(res.kept.vertices()));
    }

    #[test]
    fn notch_through_one_edge_is_oriented_by_distance() {
        let expected = [
            p(0.0, 0.0),
            p(1.5, 0.0),
            p(2.0, 1.0),
            p(2.5, 0.0),
            p(4.0, 0.0),
            p(0.0, 4.0),
        ];
        let forward = ResolveCut::new(vec![p(1.0, -1.0), p(2.0, 1.0), p(3.0, -1.0)])
            .execute(&triangle())
            .unwrap();
        let backward = ResolveCut::new(vec![p(3.0, -1.0), p(2.0, 1.0), p(1.0, -1.0)])
            .execute(&triangle())
            .unwrap();
        assert_vertices(forward.kept.vertices(), &expected);
        assert_vertices(backward.kept.vertices(), &expected);
        assert!(is_simple_2d(forward.kept.vertices()));
    }

    #[test]
    fn path_leaving_and_reentering_is_rejected() {
        // In through the base, out and back in through the hypotenuse, out
        // through the base again.
        let tri = triangle();
        let err = ResolveCut::new(vec![
            p(1.0, -1.0),
            p(1.0, 5.0),
            p(2.0, 5.0),
            p(2.0, 1.0),
            p(3.0, -1.0),
        ])
        .execute(&tri)
        .unwrap_err();
        assert!(matches!(err, FlakeError::Cut(CutError::NonSimpleResult)));
    }

    #[test]
    fn resolution_is_deterministic() {
        let cut = vec![p(-1.0, 2.0), p(1.0, 2.5), p(2.0, 0.5), p(2.5, -1.0)];
        let a = ResolveCut::new(cut.clone()).execute(&triangle()).unwrap();
        let b = ResolveCut::new(cut).execute(&triangle()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cut_through_a_vertex_merges_duplicates() {
        // Enters at the (4, 0) corner itself.
        let res = ResolveCut::new(vec![p(5.0, 0.0), p(4.0, 0.0), p(1.0, 1.0), p(1.0, -1.0)])
            .execute(&triangle())
            .unwrap();
        let v = res.kept.vertices();
        for i in 0..v.len() {
            assert!(!coincident(&v[i], &v[(i + 1) % v.len()]), "{v:?}");
        }
        assert!(v.len() >= 3);
    }

    #[test]
    fn boundary_is_not_modified() {
        let tri = triangle();
        let before = tri.clone();
        let _ = ResolveCut::new(vec![p(3.0, -1.0), p(3.0, 2.0)]).execute(&tri).unwrap();
        assert_eq!(tri, before);
    }
}
