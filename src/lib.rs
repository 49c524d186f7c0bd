pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod math;
pub mod operations;
pub mod render;
pub mod session;
pub mod tessellation;

pub use config::{Dimensions, FoldParams, ValidationPolicy};
pub use error::{FlakeError, Result};
pub use geometry::{BoundaryPolygon, EdgeHit, Segment};
pub use history::History;
pub use math::Point2;
pub use render::FlakeRenderer;
pub use session::{Flake, PointerOutcome};
