//! Kanban board engine with undoable deletes
//!
//! This crate holds the state behind a drag-and-drop kanban board: ordered
//! columns, tasks that belong to columns, list reordering for drag gestures,
//! and an undo/redo history of deletions. Persistence is pluggable through
//! [`persist::BlobStore`]; every change to the store is written back as two
//! JSON blobs.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{
//!     column::{AddColumn, DeleteColumn},
//!     history::UndoOperation,
//!     task::AddTask,
//!     BoardContext, Execute,
//! };
//!
//! let mut ctx = BoardContext::default();
//! let column = AddColumn::new().execute(&mut ctx).into_result()?;
//! let column_id = column["id"].as_str().unwrap_or_default().to_string();
//! AddTask::new(column_id.as_str()).execute(&mut ctx).into_result()?;
//!
//! DeleteColumn::new(column_id.as_str()).execute(&mut ctx).into_result()?;
//! assert_eq!(ctx.store().task_count(), 0);
//!
//! UndoOperation::new().execute(&mut ctx).into_result()?;
//! assert_eq!(ctx.store().task_count(), 1);
//! # Ok::<(), kanban_board::BoardError>(())
//! ```
//!
//! ## Storage
//!
//! ```text
//! <root>/
//! ├── columns.json    # ordered column array
//! └── tasks.json      # ordered task array, each with its columnId
//! ```

mod context;
mod error;
mod outcome;
mod processor;

pub mod board;
pub mod column;
pub mod config;
pub mod filter;
pub mod history;
pub mod intent;
pub mod persist;
pub mod reorder;
pub mod store;
pub mod task;
pub mod types;

// Re-export the operation traits and result types
pub use kanban_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use config::{BoardConfig, ENV_PREFIX};
pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use history::{History, HistoryEntry, RedoOrder};
pub use intent::Intent;
pub use processor::KanbanOperationProcessor;
pub use reorder::ItemKind;
pub use store::{EntityStore, StoreChange, StoreObserver};

pub use types::{Column, ColumnId, Identified, Placed, Task, TaskId};
