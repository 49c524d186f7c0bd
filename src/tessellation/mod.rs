mod tessellate_polygon;

pub use tessellate_polygon::TessellatePolygon;

use crate::math::Point2;

/// A triangle mesh covering a planar polygon.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Sum of the (unsigned) triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                ((b - a).perp(&(c - a)) * 0.5).abs()
            })
            .sum()
    }
}
