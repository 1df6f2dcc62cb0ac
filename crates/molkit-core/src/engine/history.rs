use crate::core::models::graph::MoleculeGraph;
use std::collections::VecDeque;
use tracing::trace;

/// Number of snapshots retained by [`UndoStack::new`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A bounded, pointer-indexed history of molecule snapshots.
///
/// Snapshots are deep copies on the way in and on the way out, so no caller can reach
/// into the stored history. Pushing after an undo discards the redo tail; pushing past
/// capacity evicts the oldest snapshot.
#[derive(Debug, Clone)]
pub struct UndoStack {
    snapshots: VecDeque<MoleculeGraph>,
    /// Index of the current snapshot, `None` while the history is empty.
    pointer: Option<usize>,
    capacity: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history retaining at most `capacity` snapshots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            pointer: None,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records `graph` as the newest state.
    pub fn push(&mut self, graph: &MoleculeGraph) {
        let keep = self.pointer.map_or(0, |p| p + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push_back(graph.clone());

        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            trace!("History full; evicted the oldest snapshot.");
        }
        self.pointer = Some(self.snapshots.len() - 1);
    }

    /// Steps back one snapshot and returns a copy of it, or `None` at the oldest one.
    pub fn undo(&mut self) -> Option<MoleculeGraph> {
        let pointer = self.pointer.filter(|&p| p > 0)?;
        self.pointer = Some(pointer - 1);
        self.snapshots.get(pointer - 1).cloned()
    }

    /// Steps forward one snapshot and returns a copy of it, or `None` at the newest one.
    pub fn redo(&mut self) -> Option<MoleculeGraph> {
        let next = self.pointer.map(|p| p + 1)?;
        let snapshot = self.snapshots.get(next)?.clone();
        self.pointer = Some(next);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.pointer.is_some_and(|p| p > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.pointer
            .is_some_and(|p| p + 1 < self.snapshots.len())
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.pointer = None;
    }

    /// A copy of the snapshot at the pointer, or `None` while the history is empty.
    pub fn current_state(&self) -> Option<MoleculeGraph> {
        self.pointer
            .and_then(|p| self.snapshots.get(p))
            .cloned()
    }
}
