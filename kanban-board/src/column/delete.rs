//! DeleteColumn command


use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::history::HistoryEntry;
use crate::outcome::logged;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Delete a column and every task in it (undoable)
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column together with its tasks"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let Some((column, tasks)) = ctx.store_mut().remove_column(&self.id) else {
            return ctx.missing_column(&self.id);
        };
        let task_count = tasks.len();
        ctx.record_delete(HistoryEntry::DeleteColumn { column, tasks });

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string(),
            "tasks": task_count,
        }))
    }
}

impl Execute<BoardContext, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
