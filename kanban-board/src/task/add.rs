//! AddTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::logged;
use crate::types::ColumnId;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Append a new task to a column.
///
/// The column is only checked in strict mode; otherwise a task may be created
/// for a column that does not exist (it stays invisible as an orphan).
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// The column the task belongs to
    pub column_id: ColumnId,
    /// Task content; "Task N" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Append a new task to a column"
);

impl AddTask {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if ctx.config().strict && ctx.store().column(&self.column_id).is_none() {
            return ctx.missing_column(&self.column_id);
        }
        let task = match &self.content {
            Some(content) => ctx
                .store_mut()
                .create_task_with_content(&self.column_id, content.clone()),
            None => ctx.store_mut().create_task(&self.column_id),
        };
        ctx.history_mut().fork();
        Ok(serde_json::to_value(&task)?)
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();
        let result = self.apply(ctx);
        logged(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::config::BoardConfig;

    #[test]
    fn test_add_task() {
        let mut ctx = BoardContext::default();
        let column = AddColumn::new().execute(&mut ctx).into_result().unwrap();
        let column_id = column["id"].as_str().unwrap();

        let first = AddTask::new(column_id).execute(&mut ctx).into_result().unwrap();
        let second = AddTask::new(column_id)
            .with_content("Ship it")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(first["content"], "Task 1");
        assert_eq!(first["columnId"], column_id);
        assert_eq!(second["content"], "Ship it");
    }

    #[test]
    fn test_add_task_to_unknown_column() {
        let mut ctx = BoardContext::default();
        AddTask::new("ghost").execute(&mut ctx).into_result().unwrap();
        assert_eq!(ctx.store().orphaned_tasks().len(), 1);

        let mut strict = BoardContext::new(BoardConfig::default().with_strict(true));
        let result = AddTask::new("ghost").execute(&mut strict).into_result();
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert_eq!(strict.store().task_count(), 0);
    }
}
