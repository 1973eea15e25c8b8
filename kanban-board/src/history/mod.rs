//! Undo/redo history and its commands

mod entry;
mod manager;
mod redo;
mod undo;

pub use entry::HistoryEntry;
pub use manager::{History, RedoOrder};
pub use redo::RedoOperation;
pub use undo::UndoOperation;
