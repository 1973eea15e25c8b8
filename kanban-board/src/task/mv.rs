//! MoveTask command


use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use crate::types::TaskId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Move a task onto another task, adopting that task's column.
///
/// Dropping on empty column space is resolved by the caller; this command
/// always targets a task.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task being dragged
    pub active: TaskId,
    /// The task it was dropped on
    pub over: TaskId,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to the position of another task"
);

impl MoveTask {
    pub fn new(active: impl Into<TaskId>, over: impl Into<TaskId>) -> Self {
        Self {
            active: active.into(),
            over: over.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        for id in [&self.active, &self.over] {
            if ctx.store().task(id).is_none() {
                return ctx.missing_task(id);
            }
        }
        let moved = ctx.store_mut().move_task(&self.active, &self.over);
        match ctx.store().task(&self.active) {
            Some(task) => Ok(serde_json::json!({
                "moved": moved,
                "task": task,
                "index": ctx.store().tasks().iter().position(|t| t.id == self.active),
            })),
            None => ctx.missing_task(&self.active),
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}
