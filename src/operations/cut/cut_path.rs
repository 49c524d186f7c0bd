use crate::config::ValidationPolicy;
use crate::error::{CutError, Result};
use crate::math::Point2;

use super::ValidateExtension;

/// The growing, open polyline of an in-progress cut.
#[derive(Debug, Clone, Default)]
pub struct CutPath {
    points: Vec<Point2>,
    policy: ValidationPolicy,
}

impl CutPath {
    /// Creates an empty cut path using the default validation policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cut path validated with `policy`.
    #[must_use]
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            points: Vec::new(),
            policy,
        }
    }

    /// Returns the validation policy.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Returns the points added so far.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns an owned copy of the points.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        self.points.clone()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` once at least one point has been added.
    #[must_use]
    pub fn is_started(&self) -> bool {
        !self.points.is_empty()
    }

    /// Returns `true` if the path has enough points to cut along.
    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.points.len() > 1
    }

    /// Returns `true` if appending `candidate` keeps the path simple.
    #[must_use]
    pub fn validate(&self, candidate: Point2) -> bool {
        ValidateExtension::new(&self.points, candidate, self.policy).execute()
    }

    /// Appends `candidate` if it passes [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`CutError::SelfIntersecting`] and leaves the path unchanged if
    /// the extension would cross the path.
    pub fn try_push(&mut self, candidate: Point2) -> Result<()> {
        if !self.validate(candidate) {
            return Err(CutError::SelfIntersecting.into());
        }
        self.points.push(candidate);
        Ok(())
    }

    /// Appends a point without validation.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Removes and returns the most recent point.
    pub fn pop(&mut self) -> Option<Point2> {
        self.points.pop()
    }

    /// Discards all points, keeping the policy.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Discards all points and starts again from `point`.
    pub fn restart_at(&mut self, point: Point2) {
        self.points.clear();
        self.points.push(point);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FlakeError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn lifecycle_flags() {
        let mut cut = CutPath::new();
        assert!(!cut.is_started());
        assert!(!cut.can_finish());
        cut.push(p(0.0, 0.0));
        assert!(cut.is_started());
        assert!(!cut.can_finish());
        cut.push(p(1.0, 0.0));
        assert!(cut.can_finish());
        assert_eq!(cut.pop(), Some(p(1.0, 0.0)));
        assert_eq!(cut.len(), 1);
        cut.clear();
        assert!(cut.is_empty());
    }

    #[test]
    fn try_push_rejects_self_crossing_and_keeps_path() {
        let mut cut = CutPath::new();
        for pt in [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)] {
            cut.try_push(pt).unwrap();
        }
        let err = cut.try_push(p(5.0, -5.0)).unwrap_err();
        assert!(matches!(err, FlakeError::Cut(CutError::SelfIntersecting)));
        assert_eq!(cut.len(), 3);
        cut.try_push(p(0.0, 10.0)).unwrap();
        assert_eq!(cut.len(), 4);
    }

    #[test]
    fn points_are_copied_out() {
        let mut cut = CutPath::with_policy(ValidationPolicy::SingleIntersection);
        cut.push(p(1.0, 2.0));
        let mut copy = cut.to_points();
        copy[0] = p(9.0, 9.0);
        assert_eq!(cut.points()[0], p(1.0, 2.0));
        assert_eq!(cut.policy(), ValidationPolicy::SingleIntersection);
    }

    #[test]
    fn restart_replaces_points() {
        let mut cut = CutPath::new();
        cut.push(p(0.0, 0.0));
        cut.push(p(1.0, 1.0));
        cut.restart_at(p(5.0, 5.0));
        assert_eq!(cut.points(), &[p(5.0, 5.0)]);
    }
}
