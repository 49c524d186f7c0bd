pub mod boundary;
pub mod segment;

pub use boundary::{intersect_edges, isosceles_base, BoundaryPolygon, EdgeHit};
pub use segment::{edges_of, Segment};
