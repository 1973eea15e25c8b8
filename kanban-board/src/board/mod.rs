//! Board-level commands (reads and search)

mod get;
mod search;

pub use get::GetBoard;
pub use search::{SearchBoard, SetSearchQuery};
