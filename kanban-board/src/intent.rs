//! Input intents from the interaction layer
//!
//! An [`Intent`] is what a gesture or key press turns into. Dispatching one
//! builds the matching command and runs it through a processor.

use crate::board::SetSearchQuery;
use crate::column::{AddColumn, DeleteColumn, MoveColumn, RenameColumn};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::history::{RedoOperation, UndoOperation};
use crate::reorder::ItemKind;
use crate::task::{AddTask, DeleteTask, EditTask, MoveTask};
use crate::types::{ColumnId, TaskId};
use kanban_operations::OperationProcessor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A discrete user intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    CreateColumn,
    RenameColumn {
        id: ColumnId,
        title: String,
    },
    CreateTask {
        column_id: ColumnId,
    },
    EditTask {
        id: TaskId,
        content: String,
    },
    DeleteColumn {
        id: ColumnId,
    },
    DeleteTask {
        id: TaskId,
    },
    /// End of a drag: `active_id` now sits where `over_id` was
    MoveItem {
        active_id: String,
        over_id: String,
        item_kind: ItemKind,
    },
    Undo,
    Redo,
    SetSearchQuery {
        text: String,
    },
}

impl Intent {
    /// Run the intent against `ctx` through `processor`
    pub fn dispatch<P>(&self, processor: &P, ctx: &mut BoardContext) -> Result<Value>
    where
        P: OperationProcessor<BoardContext, BoardError>,
    {
        match self {
            Self::CreateColumn => processor.process(&AddColumn::new(), ctx),
            Self::RenameColumn { id, title } => {
                processor.process(&RenameColumn::new(id, title.as_str()), ctx)
            }
            Self::CreateTask { column_id } => processor.process(&AddTask::new(column_id), ctx),
            Self::EditTask { id, content } => {
                processor.process(&EditTask::new(id, content.as_str()), ctx)
            }
            Self::DeleteColumn { id } => processor.process(&DeleteColumn::new(id), ctx),
            Self::DeleteTask { id } => processor.process(&DeleteTask::new(id), ctx),
            Self::MoveItem {
                active_id,
                over_id,
                item_kind: ItemKind::Column,
            } => processor.process(&MoveColumn::new(active_id.as_str(), over_id.as_str()), ctx),
            Self::MoveItem {
                active_id,
                over_id,
                item_kind: ItemKind::Task,
            } => processor.process(&MoveTask::new(active_id.as_str(), over_id.as_str()), ctx),
            Self::Undo => processor.process(&UndoOperation::new(), ctx),
            Self::Redo => processor.process(&RedoOperation::new(), ctx),
            Self::SetSearchQuery { text } => {
                processor.process(&SetSearchQuery::new(text.as_str()), ctx)
            }
        }
    }
}
