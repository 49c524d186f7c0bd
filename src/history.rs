use slotmap::SlotMap;
use tracing::debug;

use crate::geometry::BoundaryPolygon;

slotmap::new_key_type! {
    /// Unique identifier for a snapshot in the history arena.
    pub struct SnapshotId;
}

/// One boundary state and its links in the history chain.
#[derive(Debug, Clone)]
struct Snapshot {
    boundary: BoundaryPolygon,
    prev: Option<SnapshotId>,
    next: Option<SnapshotId>,
}

/// Linear undo/redo chain of boundary snapshots.
///
/// Snapshots live in an arena and reference each other via typed IDs. Every
/// node has at most one predecessor and one successor; pushing after an undo
/// drops the abandoned redo branch, so the chain never forks.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: SlotMap<SnapshotId, Snapshot>,
    root: SnapshotId,
    current: SnapshotId,
}

impl History {
    /// Creates a history whose only snapshot is `initial`.
    #[must_use]
    pub fn new(initial: BoundaryPolygon) -> Self {
        let mut snapshots = SlotMap::with_key();
        let root = snapshots.insert(Snapshot {
            boundary: initial,
            prev: None,
            next: None,
        });
        Self {
            snapshots,
            root,
            current: root,
        }
    }

    /// Returns the boundary at the cursor.
    #[must_use]
    pub fn current(&self) -> &BoundaryPolygon {
        // The cursor always points at a live snapshot.
        &self.snapshots[self.current].boundary
    }

    /// Returns the ID of the snapshot at the cursor.
    #[must_use]
    pub fn current_id(&self) -> SnapshotId {
        self.current
    }

    /// Appends `boundary` after the cursor and moves the cursor onto it.
    ///
    /// Any snapshots that were reachable by redo are discarded.
    pub fn push(&mut self, boundary: BoundaryPolygon) -> SnapshotId {
        let dropped = self.truncate_after_current();
        let id = self.snapshots.insert(Snapshot {
            boundary,
            prev: Some(self.current),
            next: None,
        });
        self.snapshots[self.current].next = Some(id);
        self.current = id;
        debug!(dropped, depth = self.count_cuts(), "history push");
        id
    }

    /// Moves the cursor to the previous snapshot. Returns `false` at the root.
    pub fn undo(&mut self) -> bool {
        match self.snapshots[self.current].prev {
            Some(prev) => {
                self.current = prev;
                debug!(depth = self.count_cuts(), "history undo");
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to the next snapshot. Returns `false` at the tip.
    pub fn redo(&mut self) -> bool {
        match self.snapshots[self.current].next {
            Some(next) => {
                self.current = next;
                debug!(depth = self.count_cuts(), "history redo");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if [`Self::undo`] would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.snapshots[self.current].prev.is_some()
    }

    /// Returns `true` if [`Self::redo`] would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.snapshots[self.current].next.is_some()
    }

    /// Number of predecessor links from the cursor back to the root,
    /// i.e. how many cuts the current shape has received.
    #[must_use]
    pub fn count_cuts(&self) -> usize {
        let mut count = 0;
        let mut id = self.current;
        while let Some(prev) = self.snapshots[id].prev {
            count += 1;
            id = prev;
        }
        count
    }

    /// Total number of stored snapshots, redo branch included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the initial snapshot is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the boundaries from the root to the tip, in order.
    #[must_use]
    pub fn chain(&self) -> Vec<&BoundaryPolygon> {
        let mut out = Vec::with_capacity(self.snapshots.len());
        let mut cursor = Some(self.root);
        while let Some(id) = cursor {
            let snapshot = &self.snapshots[id];
            out.push(&snapshot.boundary);
            cursor = snapshot.next;
        }
        out
    }

    /// Removes every snapshot after the cursor, returning how many were dropped.
    fn truncate_after_current(&mut self) -> usize {
        let mut dropped = 0;
        let mut cursor = self.snapshots[self.current].next.take();
        while let Some(id) = cursor {
            cursor = self.snapshots.remove(id).and_then(|s| s.next);
            dropped += 1;
        }
        dropped
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn tri(scale: f64) -> BoundaryPolygon {
        BoundaryPolygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(scale, 0.0),
            Point2::new(0.0, scale),
        ])
        .unwrap()
    }

    #[test]
    fn starts_at_root() {
        let history = History::new(tri(1.0));
        assert_eq!(history.current(), &tri(1.0));
        assert_eq!(history.count_cuts(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn undo_redo_at_ends_are_no_ops() {
        let mut history = History::new(tri(1.0));
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.current(), &tri(1.0));
    }

    #[test]
    fn round_trip_undo_redo() {
        let mut history = History::new(tri(1.0));
        for i in 2..=5 {
            history.push(tri(f64::from(i)));
        }
        assert_eq!(history.count_cuts(), 4);
        for _ in 0..4 {
            assert!(history.undo());
        }
        assert_eq!(history.current(), &tri(1.0));
        for _ in 0..4 {
            assert!(history.redo());
        }
        assert_eq!(history.current(), &tri(5.0));
        assert_eq!(history.count_cuts(), 4);
    }

    #[test]
    fn push_after_undo_truncates_redo_branch() {
        let mut history = History::new(tri(1.0));
        history.push(tri(2.0));
        history.push(tri(3.0));
        history.undo();
        history.undo();
        history.push(tri(7.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.current(), &tri(7.0));
        assert_eq!(history.len(), 2);
        let chain = history.chain();
        assert_eq!(chain, vec![&tri(1.0), &tri(7.0)]);
    }

    #[test]
    fn count_cuts_follows_cursor() {
        let mut history = History::new(tri(1.0));
        history.push(tri(2.0));
        history.push(tri(3.0));
        history.undo();
        assert_eq!(history.count_cuts(), 1);
        assert_eq!(history.chain().len(), 3);
    }
}
