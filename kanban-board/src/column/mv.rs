//! MoveColumn command


use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Move a column to the position of another column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    /// The column being dragged
    pub active: ColumnId,
    /// The column it was dropped on
    pub over: ColumnId,
}

operation!(
    MoveColumn,
    verb = "move",
    noun = "column",
    description = "Move a column to the position of another column"
);

impl MoveColumn {
    pub fn new(active: impl Into<ColumnId>, over: impl Into<ColumnId>) -> Self {
        Self {
            active: active.into(),
            over: over.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        for id in [&self.active, &self.over] {
            if ctx.store().column(id).is_none() {
                return ctx.missing_column(id);
            }
        }
        let moved = ctx.store_mut().move_column(&self.active, &self.over);
        let order: Vec<&str> = ctx.store().columns().iter().map(|c| c.id.as_str()).collect();
        Ok(serde_json::json!({ "moved": moved, "order": order }))
    }
}

impl Execute<BoardContext, BoardError> for MoveColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
