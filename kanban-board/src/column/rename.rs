//! RenameColumn command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Change a column's title
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column ID
    pub id: ColumnId,
    /// The new title
    pub title: String,
}

operation!(
    RenameColumn,
    verb = "rename",
    noun = "column",
    description = "Change a column's title"
);

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if !ctx.store_mut().rename_column(&self.id, self.title.clone()) {
            return ctx.missing_column(&self.id);
        }
        match ctx.store().column(&self.id) {
            Some(column) => Ok(serde_json::to_value(column)?),
            None => ctx.missing_column(&self.id),
        }
    }
}

impl Execute<BoardContext, BoardError> for RenameColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
