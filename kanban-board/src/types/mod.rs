//! Core types for the kanban engine

mod board;
mod ids;
mod placed;

// Re-export all types
pub use board::{Column, Identified, Task};
pub use ids::{ColumnId, TaskId};
pub use placed::Placed;
