//! Operation metadata and execution traits

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every command declares: what it does to which kind of thing
pub trait Operation {
    /// The action, e.g. "add", "delete", "move"
    fn verb(&self) -> &'static str;

    /// The target kind, e.g. "column", "task", "history"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string used in log entries ("add column")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run a command against a context
pub trait Execute<C, E>: Operation {
    /// Execute the command, mutating the context
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

/// Implement [`Operation`] for a command struct.
///
/// ```ignore
/// operation!(DeleteTask, verb = "delete", noun = "task", description = "Delete a task");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $description:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}
