//! EditTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use crate::types::TaskId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Replace a task's content
#[derive(Debug, Deserialize, Serialize)]
pub struct EditTask {
    /// The task ID
    pub id: TaskId,
    /// The new content
    pub content: String,
}

operation!(
    EditTask,
    verb = "edit",
    noun = "task",
    description = "Replace a task's content"
);

impl EditTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if !ctx.store_mut().edit_task_content(&self.id, self.content.clone()) {
            return ctx.missing_task(&self.id);
        }
        match ctx.store().task(&self.id) {
            Some(task) => Ok(serde_json::to_value(task)?),
            None => ctx.missing_task(&self.id),
        }
    }
}

impl Execute<BoardContext, BoardError> for EditTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
