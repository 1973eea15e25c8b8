//! Operation processor abstraction

use crate::Execute;
use serde_json::Value;

/// Runs operations and takes care of what happens around them
/// (actor attribution, activity logging)
pub trait OperationProcessor<C, E> {
    /// Execute `op` against `ctx` and return its value
    fn process<O>(&self, op: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}
