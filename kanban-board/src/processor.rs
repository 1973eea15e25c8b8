//! KanbanOperationProcessor - runs commands and keeps the activity log

use crate::context::BoardContext;
use crate::error::BoardError;
use kanban_operations::{Execute, OperationProcessor};
use serde_json::Value;
use tracing::{info, warn};

/// Processor for board commands
///
/// Executes a command, stamps its log entry with the actor (if any) and
/// appends the entry to the context's activity log. Read-only commands
/// produce no entry and leave the log untouched.
#[derive(Debug, Clone, Default)]
pub struct KanbanOperationProcessor {
    actor: Option<String>,
}

impl KanbanOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor that attributes every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, BoardError> for KanbanOperationProcessor {
    fn process<O>(&self, op: &O, ctx: &mut BoardContext) -> Result<Value, BoardError>
    where
        O: Execute<BoardContext, BoardError>,
    {
        let (result, log_entry) = op.execute(ctx).split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            match &result {
                Ok(_) => info!(
                    op = %entry.op,
                    actor = ?entry.actor,
                    duration_us = entry.duration_us,
                    "operation applied"
                ),
                Err(error) => warn!(op = %entry.op, %error, "operation failed"),
            }
            ctx.record_activity(entry);
        }

        result
    }
}
