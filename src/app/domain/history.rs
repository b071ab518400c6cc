/// Maximum number of snapshots kept on the undo stack.
pub const UNDO_LIMIT: usize = 10;

/// Linear undo/redo over whole-document snapshots.
///
/// Every entry is a full copy of the text at one edit point; there is no
/// diffing. The undo stack is capped at [`UNDO_LIMIT`] and drops its oldest
/// snapshot first when the cap is exceeded. The redo stack is unbounded but
/// is wiped by every new edit, so redo never branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` as the state to return to on the next undo.
    /// Any pending redo history is discarded.
    pub fn record_edit(&mut self, snapshot: String) {
        self.push_undo(snapshot);
        self.redo_stack.clear();
    }

    /// Step back one snapshot. `current` moves to the redo stack and the
    /// previous snapshot is returned for the caller to display.
    ///
    /// Returns `None` and leaves both stacks untouched when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(previous)
    }

    /// Step forward one snapshot. `current` moves back onto the undo stack.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current.to_string());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo snapshots, oldest first.
    pub fn undo_entries(&self) -> &[String] {
        &self.undo_stack
    }

    /// Redo snapshots, oldest first (the last entry is redone next).
    pub fn redo_entries(&self) -> &[String] {
        &self.redo_stack
    }

    fn push_undo(&mut self, snapshot: String) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > UNDO_LIMIT {
            let overflow = self.undo_stack.len() - UNDO_LIMIT;
            self.undo_stack.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_then_redo_scenario() {
        let mut history = History::new();
        history.record_edit("a".to_string());
        let current = "ab".to_string();
        assert_eq!(history.undo_entries(), ["a"]);

        let current = {
            let previous = history.undo(&current).unwrap();
            assert_eq!(previous, "a");
            assert!(history.undo_entries().is_empty());
            assert_eq!(history.redo_entries(), ["ab"]);
            previous
        };

        let next = history.redo(&current).unwrap();
        assert_eq!(next, "ab");
        assert!(history.redo_entries().is_empty());
        assert_eq!(history.undo_entries(), ["a"]);
    }

    #[test]
    fn test_undo_limit_evicts_oldest() {
        let mut history = History::new();
        for i in 1..=11 {
            history.record_edit(format!("snapshot {}", i));
        }
        let entries = history.undo_entries();
        assert_eq!(entries.len(), UNDO_LIMIT);
        assert_eq!(entries[0], "snapshot 2");
        assert_eq!(entries[UNDO_LIMIT - 1], "snapshot 11");
        assert!(!entries.iter().any(|s| s == "snapshot 1"));
    }

    #[test]
    fn test_undo_stack_never_exceeds_limit() {
        let mut history = History::new();
        for i in 0..50 {
            history.record_edit(i.to_string());
            assert!(history.undo_entries().len() <= UNDO_LIMIT);
        }
    }

    #[test]
    fn test_record_edit_clears_redo() {
        let mut history = History::new();
        history.record_edit("one".to_string());
        history.record_edit("two".to_string());
        history.undo("three");
        history.undo("two");
        assert_eq!(history.redo_entries().len(), 2);

        history.record_edit("one".to_string());
        assert!(history.redo_entries().is_empty());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new();
        history.record_edit("x".to_string());
        history.undo("y");
        let before = history.clone();

        assert_eq!(history.undo("x"), None);
        assert_eq!(history, before);
    }

    #[test]
    fn test_redo_on_empty_is_noop() {
        let mut history = History::new();
        history.record_edit("x".to_string());
        let before = history.clone();

        assert_eq!(history.redo("y"), None);
        assert_eq!(history, before);
    }

    #[test]
    fn test_redo_respects_limit() {
        let mut history = History::new();
        for i in 0..UNDO_LIMIT {
            history.record_edit(i.to_string());
        }
        // Refill the undo stack so the push made by redo overflows it.
        let previous = history.undo("current").unwrap();
        assert_eq!(previous, (UNDO_LIMIT - 1).to_string());
        history.push_undo("extra".to_string());
        assert_eq!(history.undo_entries().len(), UNDO_LIMIT);

        let next = history.redo(&previous).unwrap();
        assert_eq!(next, "current");
        assert_eq!(history.undo_entries().len(), UNDO_LIMIT);
        assert_eq!(history.undo_entries().last().unwrap(), &previous);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record_edit("a".to_string());
        history.undo("b");
        history.record_edit("c".to_string());
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
