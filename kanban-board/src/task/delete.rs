//! DeleteTask command


use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::history::HistoryEntry;
use crate::outcome::logged;
use crate::types::TaskId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Delete a task (undoable)
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some(task) = ctx.store_mut().remove_task(&self.id) else {
            return ctx.missing_task(&self.id);
        };
        let column_id = task.item.column_id.to_string();
        ctx.record_delete(HistoryEntry::DeleteTask { task });

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string(),
            "column_id": column_id,
        }))
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
