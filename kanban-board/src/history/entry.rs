//! Undoable operations

use crate::store::EntityStore;
use crate::types::{Column, Placed, Task};
use serde::{Deserialize, Serialize};

/// Everything needed to reverse one destructive operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum HistoryEntry {
    /// A column was deleted together with its tasks
    DeleteColumn {
        column: Placed<Column>,
        tasks: Vec<Placed<Task>>,
    },
    /// A single task was deleted
    DeleteTask { task: Placed<Task> },
}

impl HistoryEntry {
    /// Short label for logs ("delete column")
    pub fn label(&self) -> &'static str {
        match self {
            Self::DeleteColumn { .. } => "delete column",
            Self::DeleteTask { .. } => "delete task",
        }
    }

    /// Put the deleted entities back
    pub(crate) fn revert(&self, store: &mut EntityStore) -> bool {
        match self {
            Self::DeleteColumn { column, tasks } => {
                store.restore_column(column.clone(), tasks.clone())
            }
            Self::DeleteTask { task } => store.restore_task(task.clone()),
        }
    }

    /// Perform the deletion again against the current store.
    ///
    /// Returns the entry describing what was actually removed, or `None` when
    /// the target is already gone.
    pub(crate) fn reapply(&self, store: &mut EntityStore) -> Option<HistoryEntry> {
        match self {
            Self::DeleteColumn { column, .. } => store
                .remove_column(&column.item.id)
                .map(|(column, tasks)| Self::DeleteColumn { column, tasks }),
            Self::DeleteTask { task } => store
                .remove_task(&task.item.id)
                .map(|task| Self::DeleteTask { task }),
        }
    }
}
