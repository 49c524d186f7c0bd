use std::collections::{HashMap, HashSet, VecDeque};

use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::geometry::BoundaryPolygon;
use crate::math::Point2;

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a boundary polygon for fill rendering.
pub struct TessellatePolygon<'a> {
    boundary: &'a BoundaryPolygon,
}

impl<'a> TessellatePolygon<'a> {
    /// Creates a new `TessellatePolygon` operation.
    #[must_use]
    pub fn new(boundary: &'a BoundaryPolygon) -> Self {
        Self { boundary }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex cannot be inserted into the triangulation
    /// or two boundary edges cross.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut cdt = Cdt::new();
        insert_ring(&mut cdt, self.boundary.vertices())?;
        let outside = outside_faces(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face in cdt.inner_faces() {
            if outside.contains(&face.fix().index()) {
                continue;
            }
            let corners = face.vertices().map(|vh| {
                *vertex_map.entry(vh.fix().index()).or_insert_with(|| {
                    let pos = vh.position();
                    mesh.vertices.push(Point2::new(pos.x, pos.y));
                    (mesh.vertices.len() - 1) as u32
                })
            });
            mesh.indices.push(corners);
        }

        Ok(mesh)
    }
}

/// Inserts the closed ring `ring` and constrains each of its edges.
fn insert_ring(cdt: &mut Cdt, ring: &[Point2]) -> Result<()> {
    let handles = ring
        .iter()
        .map(|p| {
            cdt.insert(SpadePoint2::new(p.x, p.y)).map_err(|e: InsertionError| {
                TessellationError::Failed(format!("vertex ({}, {}) rejected: {e}", p.x, p.y))
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let next = handles.iter().cycle().skip(1);
    for (edge_index, (&from, &to)) in handles.iter().zip(next).enumerate() {
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(format!(
                "boundary edge {edge_index} crosses another edge"
            ))
            .into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Faces reachable from the convex hull without crossing the ring.
///
/// Hull edges that are not part of the ring border a face outside the shape;
/// the fill spreads from there across unconstrained edges only.
fn outside_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();

    for edge in cdt.convex_hull() {
        if cdt.is_constraint_edge(edge.as_undirected().fix()) {
            continue;
        }
        let Some(face) = edge.face().as_inner().or_else(|| edge.rev().face().as_inner()) else {
            continue;
        };
        if seen.insert(face.fix().index()) {
            queue.push_back(face.fix());
        }
    }

    while let Some(face) = queue.pop_front() {
        for edge in cdt.face(face).adjacent_edges() {
            if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                continue;
            }
            if let Some(neighbor) = edge.rev().face().as_inner() {
                if seen.insert(neighbor.fix().index()) {
                    queue.push_back(neighbor.fix());
                }
            }
        }
    }

    seen
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn triangle_produces_1_triangle() {
        let tri = BoundaryPolygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)]).unwrap();
        let mesh = TessellatePolygon::new(&tri).execute().unwrap();
        assert_eq!(mesh.indices.len(), 1);
        assert_eq!(mesh.vertices.len(), 3);
    }

    #[test]
    fn notched_shape_excludes_the_notch() {
        let shape = BoundaryPolygon::new(vec![
            p(0.0, 0.0),
            p(1.5, 0.0),
            p(2.0, 1.0),
            p(2.5, 0.0),
            p(4.0, 0.0),
            p(0.0, 4.0),
        ])
        .unwrap();
        let mesh = TessellatePolygon::new(&shape).execute().unwrap();
        assert_eq!(mesh.indices.len(), 4);
        assert_relative_eq!(mesh.area(), shape.area(), epsilon = 1e-9);
    }

    #[test]
    fn crossing_ring_is_an_error() {
        let mut cdt = Cdt::new();
        let bow_tie = [p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0), p(0.0, 4.0)];
        let err = insert_ring(&mut cdt, &bow_tie).unwrap_err();
        assert!(matches!(
            err,
            crate::error::FlakeError::Tessellation(TessellationError::Failed(_))
        ));
    }

    #[test]
    fn convex_shape_has_no_outside_faces() {
        let square =
            BoundaryPolygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap();
        let mesh = TessellatePolygon::new(&square).execute().unwrap();
        assert_eq!(mesh.indices.len(), 2);
        assert_relative_eq!(mesh.area(), 4.0, epsilon = 1e-12);
    }
}
