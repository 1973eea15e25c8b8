//! UndoOperation command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::logged;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Undo the most recent deletion
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UndoOperation {}

operation!(
    UndoOperation,
    verb = "undo",
    noun = "history",
    description = "Undo the most recent deletion"
);

impl UndoOperation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Execute<BoardContext, BoardError> for UndoOperation {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        // Nothing to undo is not an event worth logging
        let Some(entry) = ctx.undo() else {
            return ExecutionResult::Unlogged {
                value: json!({ "undone": null, "history": ctx.history_status() }),
            };
        };
        let value = json!({ "undone": entry, "history": ctx.history_status() });
        logged(self, start, Ok(value))
    }
}
