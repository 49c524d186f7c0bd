use tracing::{debug, info, warn};

use crate::config::{Dimensions, FoldParams, ValidationPolicy};
use crate::error::{CutError, Result};
use crate::geometry::BoundaryPolygon;
use crate::history::History;
use crate::math::Point2;
use crate::operations::cut::{CutPath, ResolveCut};
use crate::operations::transform::Unfold;
use crate::render::FlakeRenderer;
use crate::tessellation::{TessellatePolygon, TriangleMesh};

/// What happened to a pointer point fed to [`Flake::handle_point`].
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// A new cut path was started at the point (it lies outside the shape).
    Started,
    /// The point was appended and the path is inside the shape.
    Extended,
    /// The path never entered the shape; it restarted at the point.
    Restarted,
    /// The path crossed back out and the cut was applied.
    Completed {
        /// Vertices of the new boundary.
        vertices: Vec<Point2>,
    },
    /// The point would make the path cross itself; nothing changed.
    RejectedSelfIntersection,
    /// The point made the path cross the boundary more than twice; it was
    /// removed again.
    RejectedOverCrossing {
        /// Crossing count the point would have produced.
        crossings: usize,
    },
    /// The point lies inside the shape with no cut started.
    Ignored,
}

impl PointerOutcome {
    /// The error a rejected point maps to, if it was rejected.
    #[must_use]
    pub fn rejection(&self) -> Option<CutError> {
        match self {
            Self::RejectedSelfIntersection => Some(CutError::SelfIntersecting),
            Self::RejectedOverCrossing { crossings } => Some(CutError::OverCrossing {
                crossings: *crossings,
            }),
            _ => None,
        }
    }
}

/// One snowflake-cutting session.
///
/// Owns the current boundary (through its [`History`]), the in-progress cut
/// path, and the fold parameters. Callers only ever receive copies of vertex
/// sequences.
#[derive(Debug, Clone)]
pub struct Flake {
    params: FoldParams,
    initial: BoundaryPolygon,
    history: History,
    cut: CutPath,
}

impl Flake {
    /// Creates a session starting from the isosceles triangle in `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters produce a degenerate triangle.
    pub fn new(params: FoldParams) -> Result<Self> {
        Self::with_policy(params, ValidationPolicy::default())
    }

    /// Like [`Self::new`], validating cut paths with `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters produce a degenerate triangle.
    pub fn with_policy(params: FoldParams, policy: ValidationPolicy) -> Result<Self> {
        let initial =
            BoundaryPolygon::isosceles(params.apex(), params.height(), params.vertex_angle())?;
        Ok(Self {
            params,
            history: History::new(initial.clone()),
            initial,
            cut: CutPath::with_policy(policy),
        })
    }

    /// Returns the fold parameters.
    #[must_use]
    pub fn params(&self) -> &FoldParams {
        &self.params
    }

    /// Returns the current boundary.
    #[must_use]
    pub fn boundary(&self) -> &BoundaryPolygon {
        self.history.current()
    }

    /// Returns a copy of the current boundary's vertices.
    #[must_use]
    pub fn current_vertices(&self) -> Vec<Point2> {
        self.history.current().to_vertices()
    }

    /// Bounding box of the pristine triangle. Never changes after construction.
    #[must_use]
    pub fn original_dimensions(&self) -> Dimensions {
        self.params.dimensions()
    }

    /// Returns the in-progress cut path.
    #[must_use]
    pub fn cut_path(&self) -> &CutPath {
        &self.cut
    }

    /// Returns the history chain.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feeds one point into the in-progress cut path.
    ///
    /// Returns `false`, leaving the path unchanged, if the point would make
    /// the path cross itself.
    pub fn submit_cut_point(&mut self, point: Point2) -> bool {
        self.cut.try_push(point).is_ok()
    }

    /// Counts how many times `path` crosses the current boundary.
    #[must_use]
    pub fn crossing_count(&self, path: &[Point2]) -> usize {
        self.boundary().count_crossings(path)
    }

    /// Cuts the current boundary along `path` and records the result.
    ///
    /// Returns a copy of the new boundary's vertices.
    ///
    /// # Errors
    ///
    /// Returns a [`CutError`] if the cut cannot be resolved; the boundary and
    /// history are left untouched.
    pub fn finish_cut(&mut self, path: &[Point2]) -> Result<Vec<Point2>> {
        let resolution = ResolveCut::new(path.to_vec()).execute(self.boundary())?;
        let vertices = resolution.kept.to_vertices();
        self.history.push(resolution.kept);
        info!(
            cuts = self.history.count_cuts(),
            vertices = vertices.len(),
            "cut applied"
        );
        Ok(vertices)
    }

    /// Discards the cut in progress if one was started; otherwise steps back
    /// to the previous boundary. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.abandon_cut() {
            debug!("undo discarded the cut in progress");
            return true;
        }
        self.history.undo()
    }

    /// Steps forward to the next boundary. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Number of cuts applied to reach the current boundary.
    #[must_use]
    pub fn count_cuts(&self) -> usize {
        self.history.count_cuts()
    }

    /// Discards the in-progress cut path. Returns `true` if one was started.
    pub fn abandon_cut(&mut self) -> bool {
        let started = self.cut.is_started();
        self.cut.clear();
        started
    }

    /// Returns to the pristine triangle with an empty history.
    pub fn reset(&mut self) {
        self.history = History::new(self.initial.clone());
        self.cut.clear();
        debug!("session reset");
    }

    /// Drives the cut path from a raw pointer point.
    ///
    /// A path starts at a point outside the shape, grows while it is inside,
    /// and is applied as soon as it has crossed the boundary twice. See
    /// [`PointerOutcome`] for every case.
    ///
    /// # Errors
    ///
    /// Returns a [`CutError`] if a completed path cannot be resolved. The
    /// path is discarded in that case.
    pub fn handle_point(&mut self, point: Point2) -> Result<PointerOutcome> {
        if !self.cut.validate(point) {
            debug!(x = point.x, y = point.y, "cut can't cross itself");
            return Ok(PointerOutcome::RejectedSelfIntersection);
        }

        if self.cut.len() < 2 && !self.boundary().contains(&point) {
            self.cut.restart_at(point);
            return Ok(PointerOutcome::Started);
        }
        if !self.cut.is_started() {
            return Ok(PointerOutcome::Ignored);
        }

        self.cut.push(point);
        let crossings = self.crossing_count(self.cut.points());
        match crossings {
            0 => {
                self.cut.restart_at(point);
                Ok(PointerOutcome::Restarted)
            }
            1 => Ok(PointerOutcome::Extended),
            2 => {
                let path = self.cut.to_points();
                self.cut.clear();
                let vertices = self.finish_cut(&path)?;
                Ok(PointerOutcome::Completed { vertices })
            }
            _ => {
                self.cut.pop();
                warn!(crossings, "cut can't cross edges");
                Ok(PointerOutcome::RejectedOverCrossing { crossings })
            }
        }
    }

    /// The unfolded snowflake: one polygon per wedge around the apex.
    ///
    /// # Errors
    ///
    /// Returns an error if the fold angle is invalid.
    pub fn unfolded(&self) -> Result<Vec<Vec<Point2>>> {
        Unfold::new(self.params.apex(), self.params.vertex_angle()).execute(self.boundary().vertices())
    }

    /// Triangulates the current boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary cannot be triangulated.
    pub fn tessellate(&self) -> Result<TriangleMesh> {
        TessellatePolygon::new(self.boundary()).execute()
    }

    /// Hands snapshots of the folded shape, the cut in progress and the
    /// unfolded flake to `renderer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the unfolded layout cannot be computed.
    pub fn render<R: FlakeRenderer>(&self, renderer: &mut R) -> Result<()> {
        renderer.draw_folded(self.boundary().vertices());
        if self.cut.is_started() {
            renderer.draw_cut(self.cut.points());
        }
        renderer.draw_unfolded(&self.unfolded()?);
        Ok(())
    }
}
