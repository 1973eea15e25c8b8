//! Undo and redo stacks
//!
//! Deleting pushes onto the undo stack and forks the timeline (the redo stack
//! is dropped). Undo moves the newest entry to the redo stack and restores
//! what it deleted; redo deletes it again and moves it back.

use super::entry::HistoryEntry;
use crate::store::EntityStore;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Which undone entry `redo` replays first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedoOrder {
    /// Most recently undone first
    #[default]
    Lifo,
    /// Oldest entry in the redo stack first
    Fifo,
}

/// The History Manager
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: VecDeque<HistoryEntry>,
    order: RedoOrder,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the redo replay order
    pub fn with_order(mut self, order: RedoOrder) -> Self {
        self.order = order;
        self
    }

    /// Cap the undo stack; the oldest entries fall off.
    ///
    /// A limit of zero would make every delete un-undoable, so it is treated
    /// as no limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if limit == Some(0) {
            warn!("history limit of 0 ignored, history is unbounded");
        }
        self.limit = limit.filter(|&limit| limit > 0);
        self.trim();
        self
    }

    pub fn order(&self) -> RedoOrder {
        self.order
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            let excess = self.undo.len().saturating_sub(limit);
            if excess > 0 {
                self.undo.drain(..excess);
                debug!(dropped = excess, "history limit reached");
            }
        }
    }

    /// Record a deletion. Always clears the redo stack.
    pub fn record_delete(&mut self, entry: HistoryEntry) {
        debug!(op = entry.label(), "recording history entry");
        self.undo.push(entry);
        self.trim();
        self.fork();
    }

    /// Drop the redo branch
    pub fn fork(&mut self) {
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "redo stack cleared");
            self.redo.clear();
        }
    }

    /// Undo the newest entry. `None` if there is nothing to undo.
    pub fn undo(&mut self, store: &mut EntityStore) -> Option<&HistoryEntry> {
        let entry = self.undo.pop()?;
        debug!(op = entry.label(), "undo");
        if !entry.revert(store) {
            debug!(op = entry.label(), "undo restored nothing, entities already present");
        }
        self.redo.push_back(entry);
        self.redo.back()
    }

    /// Redo an undone entry. `None` if there is nothing to redo.
    pub fn redo(&mut self, store: &mut EntityStore) -> Option<&HistoryEntry> {
        let entry = match self.order {
            RedoOrder::Lifo => self.redo.pop_back(),
            RedoOrder::Fifo => self.redo.pop_front(),
        }?;
        debug!(op = entry.label(), "redo");
        let applied = entry.reapply(store).unwrap_or(entry);
        self.undo.push(applied);
        self.trim();
        self.undo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo stack, oldest first
    pub fn undo_entries(&self) -> &[HistoryEntry] {
        &self.undo
    }

    /// Redo stack, in the order entries were undone
    pub fn redo_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.redo.iter()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, ColumnId, Task, TaskId};

    fn board() -> EntityStore {
        EntityStore::with_entities(
            vec![
                Column {
                    id: ColumnId::from_string("1"),
                    title: "A".into(),
                },
                Column {
                    id: ColumnId::from_string("2"),
                    title: "B".into(),
                },
            ],
            vec![
                Task {
                    id: TaskId::from_string("10"),
                    column_id: ColumnId::from_string("1"),
                    content: "x".into(),
                },
                Task {
                    id: TaskId::from_string("20"),
                    column_id: ColumnId::from_string("2"),
                    content: "y".into(),
                },
            ],
        )
    }

    fn delete_task(store: &mut EntityStore, history: &mut History, id: &str) {
        let task = store.remove_task(&TaskId::from_string(id)).unwrap();
        history.record_delete(HistoryEntry::DeleteTask { task });
    }

    fn delete_column(store: &mut EntityStore, history: &mut History, id: &str) {
        let (column, tasks) = store.remove_column(&ColumnId::from_string(id)).unwrap();
        history.record_delete(HistoryEntry::DeleteColumn { column, tasks });
    }

    fn task_ids(store: &EntityStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_zero_limit_keeps_deletes_undoable() {
        let mut store = board();
        let mut history = History::new().with_limit(Some(0));
        delete_column(&mut store, &mut history, "1");
        assert_eq!(history.undo_len(), 1);

        history.undo(&mut store);
        assert_eq!(store.column_count(), 2);
        assert_eq!(task_ids(&store), vec!["10", "20"]);
    }

    #[test]
    fn test_undo_of_already_present_entity_still_moves_to_redo() {
        let mut store = board();
        let mut history = History::new();
        let task = store.task(&TaskId::from_string("10")).unwrap().clone();
        history.record_delete(HistoryEntry::DeleteTask {
            task: crate::types::Placed::new(0, task),
        });

        assert!(history.undo(&mut store).is_some());
        assert_eq!(store.task_count(), 2);
        assert_eq!(history.redo_len(), 1);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut store = board();
        let mut history = History::new();
        assert!(history.undo(&mut store).is_none());
        assert!(history.redo(&mut store).is_none());
        assert_eq!(store.column_count(), 2);
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_record_delete_clears_redo() {
        let mut store = board();
        let mut history = History::new();
        delete_task(&mut store, &mut history, "10");
        history.undo(&mut store);
        assert!(history.can_redo());

        delete_task(&mut store, &mut history, "20");
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_lifo_redo_replays_last_undo_first() {
        let mut store = board();
        let mut history = History::new();
        delete_task(&mut store, &mut history, "10");
        delete_task(&mut store, &mut history, "20");

        history.undo(&mut store);
        history.undo(&mut store);
        assert_eq!(task_ids(&store), vec!["10", "20"]);

        let redone = history.redo(&mut store).unwrap().clone();
        assert!(matches!(redone, HistoryEntry::DeleteTask { ref task } if task.item.id.as_str() == "10"));
        assert_eq!(task_ids(&store), vec!["20"]);
    }

    #[test]
    fn test_fifo_redo_replays_first_undo_first() {
        let mut store = board();
        let mut history = History::new().with_order(RedoOrder::Fifo);
        delete_task(&mut store, &mut history, "10");
        delete_task(&mut store, &mut history, "20");

        history.undo(&mut store);
        history.undo(&mut store);
        history.redo(&mut store);
        assert_eq!(task_ids(&store), vec!["10"]);
    }

    #[test]
    fn test_undo_redo_round_trip_column() {
        let mut store = board();
        let mut history = History::new();
        delete_column(&mut store, &mut history, "1");

        let columns = store.columns().to_vec();
        let tasks = store.tasks().to_vec();

        history.undo(&mut store);
        history.redo(&mut store);

        assert_eq!(store.columns(), columns.as_slice());
        assert_eq!(store.tasks(), tasks.as_slice());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_redo_captures_tasks_moved_in_after_undo() {
        let mut store = board();
        let mut history = History::new();
        delete_column(&mut store, &mut history, "1");
        history.undo(&mut store);

        // Task 20 is dragged into the restored column before redo
        store.move_task(&TaskId::from_string("20"), &TaskId::from_string("10"));
        history.redo(&mut store);
        assert!(store.tasks().is_empty());

        history.undo(&mut store);
        assert_eq!(store.task_count(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut store = board();
        let mut history = History::new().with_limit(Some(1));
        delete_task(&mut store, &mut history, "10");
        delete_task(&mut store, &mut history, "20");
        assert_eq!(history.undo_len(), 1);

        history.undo(&mut store);
        assert_eq!(task_ids(&store), vec!["20"]);
        assert!(!history.can_undo());
    }
}
