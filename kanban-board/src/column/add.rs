//! AddColumn command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Append a new column to the board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddColumn {
    /// Title of the new column; "Column N" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Append a new column to the board"
);

impl AddColumn {
    /// Create an AddColumn command with the default title
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let column = match &self.title {
            Some(title) => ctx.store_mut().create_column_titled(title.clone()),
            None => ctx.store_mut().create_column(),
        };
        ctx.history_mut().fork();
        Ok(serde_json::to_value(&column)?)
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
