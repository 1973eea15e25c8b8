//! GetBoard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::unlogged;
use crate::types::Column;
use crate::store::EntityStore;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Read the board: columns in order with their tasks, the search state and
/// undo/redo availability
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard {
    /// Only include columns matching the current search query
    #[serde(default)]
    pub visible_only: bool,
}

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Read the board with its columns and tasks"
);

impl GetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_only(mut self) -> Self {
        self.visible_only = true;
        self
    }

    fn apply(&self, ctx: &BoardContext) -> Result<Value> {
        let columns: Vec<&Column> = if self.visible_only {
            ctx.visible_columns()
        } else {
            ctx.store().columns().iter().collect()
        };
        let columns = columns
            .into_iter()
            .map(|column| column_json(ctx.store(), column))
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "columns": columns,
            "query": ctx.search_query(),
            "history": ctx.history_status(),
        }))
    }
}

/// A column with its tasks nested, the way a board view consumes it
pub(crate) fn column_json(store: &EntityStore, column: &Column) -> Result<Value> {
    let mut value = serde_json::to_value(column)?;
    let tasks: Vec<_> = store.tasks_in_column(&column.id).collect();
    value["tasks"] = serde_json::to_value(&tasks)?;
    value["task_count"] = json!(tasks.len());
    Ok(value)
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(self.apply(ctx))
    }
}
