//! # Kanban Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Commands are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_operations::*;
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddTask {
//!     /// The column that receives the task
//!     pub column_id: ColumnId,
//! }
//!
//! operation!(AddTask, verb = "add", noun = "task", description = "Create a new task");
//!
//! impl Execute<BoardContext, BoardError> for AddTask {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // implementation returns ExecutionResult::Logged or Unlogged
//!     }
//! }
//! ```
//!
//! Execution is synchronous: every command runs to completion against a
//! context it borrows mutably for the duration of the call.

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
