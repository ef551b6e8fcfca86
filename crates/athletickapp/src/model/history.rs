//! # Undo/Redo History
//!
//! History is snapshot based: before an undoable command runs, the model
//! takes a deep copy of every store. Undoing restores that copy wholesale.
//! No command has to know how to reverse itself, so a command that touches
//! three stores at once (clear, delete with cascade) is exactly as reversible
//! as one that edits a single field.
//!
//! ```text
//!   undo_stack (oldest … newest)          redo_stack (oldest … newest)
//!   ┌────┬────┬────┐      undo(current)   ┌────┐
//!   │ S1 │ S2 │ S3 │  ─────────────────►  │ C  │   S3 restored, C = state before undo
//!   └────┴────┴────┘  ◄─────────────────  └────┘
//!                         redo(current)
//! ```
//!
//! ## Rules
//!
//! - Recording a new entry clears the redo stack: history is linear.
//! - An entry moves between the stacks, it is never in both.
//! - The undo stack is bounded; past the limit the oldest entry is dropped.
//! - Popping an empty stack returns `None` and changes nothing.

use super::athletick::Athletick;
use super::performance::Performance;
use super::training::Attendance;
use std::collections::VecDeque;

/// Default maximum number of undoable steps kept.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// An owned deep copy of every store. Never shares data with the live model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    athletick: Athletick,
    performance: Performance,
    attendance: Attendance,
}

impl Snapshot {
    pub fn new(athletick: Athletick, performance: Performance, attendance: Attendance) -> Self {
        Self {
            athletick,
            performance,
            attendance,
        }
    }

    pub fn athletick(&self) -> &Athletick {
        &self.athletick
    }

    pub fn performance(&self) -> &Performance {
        &self.performance
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    pub fn into_parts(self) -> (Athletick, Performance, Attendance) {
        (self.athletick, self.performance, self.attendance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// What the command did, e.g. "add Alice Pauline".
    pub description: String,
    pub snapshot: Snapshot,
}

#[derive(Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: VecDeque<HistoryEntry>,
    max_history: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// A limit of zero is raised to one so the latest step is always undoable.
    pub fn with_capacity(max_history: usize) -> Self {
        let max_history = max_history.max(1);
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_history,
        }
    }

    /// Records the state from before a successful undoable command.
    pub fn record(&mut self, description: impl Into<String>, before: Snapshot) {
        self.undo_stack.push_back(HistoryEntry {
            description: description.into(),
            snapshot: before,
        });
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_history {
            self.undo_stack.pop_front();
        }
    }

    /// Pops the latest entry, parking `current` on the redo stack.
    ///
    /// The caller restores the returned entry's snapshot.
    pub fn undo(&mut self, current: Snapshot) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(HistoryEntry {
            description: entry.description.clone(),
            snapshot: current,
        });
        Some(entry)
    }

    /// Mirror of [`HistoryManager::undo`].
    pub fn redo(&mut self, current: Snapshot) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(HistoryEntry {
            description: entry.description.clone(),
            snapshot: current,
        });
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.description.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.back().map(|e| e.description.as_str())
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{alice, benson};

    fn snapshot_with(persons: Vec<crate::model::Person>) -> Snapshot {
        Snapshot::new(
            Athletick::from_persons(persons).unwrap(),
            Performance::new(),
            Attendance::new(),
        )
    }

    #[test]
    fn record_then_undo() {
        let mut history = HistoryManager::new();
        history.record("add Alice", snapshot_with(vec![]));

        assert!(history.can_undo());
        assert_eq!(history.undo_description(), Some("add Alice"));

        let entry = history.undo(snapshot_with(vec![alice()])).unwrap();
        assert_eq!(entry.snapshot, snapshot_with(vec![]));
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 1);
        assert_eq!(history.redo_description(), Some("add Alice"));
    }

    #[test]
    fn redo_returns_parked_state() {
        let mut history = HistoryManager::new();
        history.record("add Alice", snapshot_with(vec![]));
        history.undo(snapshot_with(vec![alice()])).unwrap();

        let entry = history.redo(snapshot_with(vec![])).unwrap();
        assert_eq!(entry.snapshot, snapshot_with(vec![alice()]));
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn new_record_clears_redo() {
        let mut history = HistoryManager::new();
        history.record("add Alice", snapshot_with(vec![]));
        history.undo(snapshot_with(vec![alice()])).unwrap();
        history.record("add Benson", snapshot_with(vec![]));

        assert!(!history.can_redo());
        assert!(history.redo(snapshot_with(vec![benson()])).is_none());
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut history = HistoryManager::new();
        assert!(history.undo(Snapshot::default()).is_none());
        assert!(history.redo(Snapshot::default()).is_none());
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn oldest_entry_is_dropped_past_limit() {
        let mut history = HistoryManager::with_capacity(3);
        for i in 0..5 {
            history.record(format!("step {i}"), Snapshot::default());
        }
        assert_eq!(history.undo_count(), 3);
        assert_eq!(history.undo_description(), Some("step 4"));
    }

    #[test]
    fn zero_capacity_keeps_one_step() {
        let mut history = HistoryManager::with_capacity(0);
        history.record("only", Snapshot::default());
        assert_eq!(history.max_history(), 1);
        assert!(history.can_undo());
    }
}
