//! Search commands

use super::get::column_json;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::filter::filter_columns;
use crate::outcome::unlogged;
use kanban_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Set the query that filters the board view
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SetSearchQuery {
    /// Text to look for; empty shows everything
    pub query: String,
}

operation!(
    SetSearchQuery,
    verb = "set",
    noun = "search",
    description = "Set the query that filters the board view"
);

impl SetSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for SetSearchQuery {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        ctx.set_search_query(self.query.clone());
        let visible: Vec<&str> = ctx.visible_columns().into_iter().map(|c| c.id.as_str()).collect();
        debug!(query = %self.query, visible = visible.len(), "search query set");
        ExecutionResult::Unlogged {
            value: json!({ "query": self.query, "visible": visible }),
        }
    }
}

/// Find columns matching a query without changing the board's own query
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchBoard {
    /// Text to look for
    pub query: String,
}

operation!(
    SearchBoard,
    verb = "search",
    noun = "board",
    description = "Find columns whose title or tasks contain the query"
);

impl SearchBoard {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    fn apply(&self, ctx: &BoardContext) -> Result<Value> {
        let store = ctx.store();
        let columns = filter_columns(store.columns(), store.tasks(), &self.query)
            .into_iter()
            .map(|column| column_json(store, column))
            .collect::<Result<Vec<_>>>()?;
        Ok(json!({ "query": self.query, "columns": columns }))
    }
}

impl Execute<BoardContext, BoardError> for SearchBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(self.apply(ctx))
    }
}
