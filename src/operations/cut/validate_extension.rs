use tracing::trace;

use crate::config::ValidationPolicy;
use crate::geometry::{intersect_edges, Segment};
use crate::math::{coincident, Point2};

/// Checks whether appending a point to an open cut path keeps it simple.
pub struct ValidateExtension<'a> {
    path: &'a [Point2],
    candidate: Point2,
    policy: ValidationPolicy,
}

impl<'a> ValidateExtension<'a> {
    /// Creates a new `ValidateExtension` query for `candidate` following `path`.
    #[must_use]
    pub fn new(path: &'a [Point2], candidate: Point2, policy: ValidationPolicy) -> Self {
        Self {
            path,
            candidate,
            policy,
        }
    }

    /// Executes the check.
    ///
    /// A path with no segments yet accepts any point. Otherwise the tentative
    /// segment from the path's last point to the candidate is intersected
    /// with the existing path segments. It always touches the final segment
    /// at the shared joint; under [`ValidationPolicy::FinalJointOnly`] every
    /// hit must be on that final segment, under
    /// [`ValidationPolicy::SingleIntersection`] there must be exactly one hit.
    /// A candidate coinciding with the last point is rejected.
    #[must_use]
    pub fn execute(&self) -> bool {
        let [.., last] = self.path else {
            return true;
        };
        let segment_count = self.path.len() - 1;
        if segment_count == 0 {
            return true;
        }
        if coincident(last, &self.candidate) {
            trace!("extension rejected: candidate coincides with last point");
            return false;
        }

        let extension = Segment::new(*last, self.candidate);
        let hits = intersect_edges(self.path, false, &extension);
        let final_edge = segment_count - 1;

        let valid = match self.policy {
            ValidationPolicy::FinalJointOnly => hits.iter().all(|hit| hit.edge_index == final_edge),
            ValidationPolicy::SingleIntersection => hits.len() == 1,
        };
        if !valid {
            trace!(
                hits = hits.len(),
                policy = ?self.policy,
                "extension rejected: path would cross itself"
            );
        }
        valid
    }
}
