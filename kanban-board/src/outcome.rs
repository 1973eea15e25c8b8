//! Turning a command's result into an `ExecutionResult`

use crate::error::{BoardError, Result};
use kanban_operations::{ExecutionResult, LogEntry, Operation};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Wrap the result of a mutating command, attaching a log entry either way
pub(crate) fn logged<O>(
    op: &O,
    start: Instant,
    result: Result<Value>,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    let input = serde_json::to_value(op).unwrap_or(Value::Null);
    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    match result {
        Ok(value) => ExecutionResult::Logged {
            value: value.clone(),
            log_entry: LogEntry::new(op.op_string(), input, value, None, duration_us),
        },
        Err(error) => {
            let error_msg = error.to_string();
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::new(
                    op.op_string(),
                    input,
                    serde_json::json!({ "error": error_msg }),
                    None,
                    duration_us,
                )),
            }
        }
    }
}

/// Wrap the result of a read-only command
pub(crate) fn unlogged(result: Result<Value>) -> ExecutionResult<Value, BoardError> {
    match result {
        Ok(value) => ExecutionResult::Unlogged { value },
        Err(error) => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
    }
}
