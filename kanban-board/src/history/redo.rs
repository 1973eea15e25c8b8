//! RedoOperation command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::logged;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Re-apply an undone deletion
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RedoOperation {}

operation!(
    RedoOperation,
    verb = "redo",
    noun = "history",
    description = "Re-apply an undone deletion"
);

impl RedoOperation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Execute<BoardContext, BoardError> for RedoOperation {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let Some(entry) = ctx.redo() else {
            return ExecutionResult::Unlogged {
                value: json!({ "redone": null, "history": ctx.history_status() }),
            };
        };
        let value = json!({ "redone": entry, "history": ctx.history_status() });
        logged(self, start, Ok(value))
    }
}
