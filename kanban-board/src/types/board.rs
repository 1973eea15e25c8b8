//! Board entities: Column and Task

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Anything that lives in an ordered sequence and can be found by id
pub trait Identified {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

/// A column is a named lane. It does not hold its tasks; tasks point back at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    /// Create a column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
        }
    }

    /// Default title for the column created after `existing` columns
    pub fn default_title(existing: usize) -> String {
        format!("Column {}", existing + 1)
    }
}

/// A single work item belonging to one column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    /// Create a task with a fresh id
    pub fn new(column_id: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }

    /// Default content for the task created after `existing` tasks (board-wide)
    pub fn default_content(existing: usize) -> String {
        format!("Task {}", existing + 1)
    }
}

impl Identified for Column {
    type Id = ColumnId;

    fn id(&self) -> &ColumnId {
        &self.id
    }
}

impl Identified for Task {
    type Id = TaskId;

    fn id(&self) -> &TaskId {
        &self.id
    }
}
