//! # Undo/Redo Stack
//!
//! Snapshot-based history over the flat component list.
//!
//! ## Design
//!
//! - Each structural action pushes the pre-action list as one undo step
//! - Undo swaps the current list for the snapshot and moves the current
//!   list to the redo stack
//! - New snapshots clear the redo stack
//! - Bounded: oldest snapshots fall off past `max_levels`
//!
//! The core algorithms stay pure over explicit inputs; this stack is the
//! only history the store carries and can be swapped for a richer history
//! engine without touching the tree or compiler.

use pagecraft_model::Component;

/// Undo/redo stack of component-list snapshots
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Snapshots available to undo (most recent last)
    undo_stack: Vec<Vec<Component>>,

    /// Snapshots available to redo (most recent last)
    redo_stack: Vec<Vec<Component>>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the pre-action state. Clears the redo stack.
    pub fn push(&mut self, snapshot: Vec<Component>) {
        self.undo_stack.push(snapshot);
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Undo: returns the list to restore, storing `current` for redo.
    pub fn undo(&mut self, current: Vec<Component>) -> Option<Vec<Component>> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Redo: returns the list to restore, storing `current` for undo.
    pub fn redo(&mut self, current: Vec<Component>) -> Option<Vec<Component>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::ComponentType;

    fn list(ids: &[&str]) -> Vec<Component> {
        ids.iter()
            .map(|id| Component::new(id.to_string(), ComponentType::Text))
            .collect()
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.undo(list(&["a"])), None);
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut stack = UndoStack::new();
        stack.push(list(&["a"]));

        let restored = stack.undo(list(&["a", "b"])).unwrap();
        assert_eq!(restored, list(&["a"]));
        assert!(stack.can_redo());

        let redone = stack.redo(restored).unwrap();
        assert_eq!(redone, list(&["a", "b"]));
        assert!(stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_new_push_clears_redo() {
        let mut stack = UndoStack::new();
        stack.push(list(&["a"]));
        let current = stack.undo(list(&["a", "b"])).unwrap();
        assert_eq!(stack.redo_levels(), 1);

        stack.push(current);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);
        stack.push(list(&["a"]));
        stack.push(list(&["b"]));
        stack.push(list(&["c"]));
        assert_eq!(stack.undo_levels(), 2);

        // Oldest snapshot fell off; the survivors are b then c.
        assert_eq!(stack.undo(list(&["d"])).unwrap(), list(&["c"]));
        assert_eq!(stack.undo(list(&["c"])).unwrap(), list(&["b"]));
        assert!(!stack.can_undo());
    }
}
