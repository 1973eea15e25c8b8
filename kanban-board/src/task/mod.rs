//! Task commands

mod add;
mod delete;
mod edit;
mod mv;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use edit::EditTask;
pub use mv::MoveTask;
