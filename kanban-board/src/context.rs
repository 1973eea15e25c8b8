//! BoardContext - everything a command operates on
//!
//! The context owns the entity store, the undo/redo history, the search query
//! and the in-memory activity log. Commands do the work; the context only
//! hands out access.

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::filter::filter_columns;
use crate::history::{History, HistoryEntry};
use crate::persist::{load_entities, BlobPersister, BlobStore};
use crate::store::EntityStore;
use crate::types::{Column, ColumnId, TaskId};
use kanban_operations::LogEntry;
use serde_json::{json, Value};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Context passed to every command
#[derive(Debug)]
pub struct BoardContext {
    store: EntityStore,
    history: History,
    config: BoardConfig,
    search_query: String,
    activity: VecDeque<LogEntry>,
}

impl BoardContext {
    /// An empty board that is not persisted anywhere
    pub fn new(config: BoardConfig) -> Self {
        Self::with_store(EntityStore::new(), config)
    }

    /// A board over an existing store
    pub fn with_store(store: EntityStore, config: BoardConfig) -> Self {
        let history = History::new()
            .with_order(config.redo_order)
            .with_limit(config.history_limit);
        Self {
            store,
            history,
            config,
            search_query: String::new(),
            activity: VecDeque::new(),
        }
    }

    /// Load a board from `blobs` and write every later change back to it
    pub fn open(blobs: impl BlobStore + 'static, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let (columns, tasks) = load_entities(&blobs, &config)?;
        let mut store = EntityStore::with_entities(columns, tasks);
        store.subscribe(Box::new(BlobPersister::new(blobs, &config)));
        info!(
            columns = store.column_count(),
            tasks = store.task_count(),
            "board opened"
        );
        Ok(Self::with_store(store, config))
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access bypasses the history; commands fork it themselves
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Record a deletion on the history
    pub fn record_delete(&mut self, entry: HistoryEntry) {
        self.history.record_delete(entry);
    }

    /// Undo the newest deletion, returning the entry that was undone
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.history.undo(&mut self.store).cloned()
    }

    /// Redo an undone deletion, returning the entry that was redone
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        self.history.redo(&mut self.store).cloned()
    }

    /// Undo/redo availability, as shown next to the board
    pub fn history_status(&self) -> Value {
        json!({
            "can_undo": self.history.can_undo(),
            "can_redo": self.history.can_redo(),
            "undo_count": self.history.undo_len(),
            "redo_count": self.history.redo_len(),
        })
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Columns matching the current search query
    pub fn visible_columns(&self) -> Vec<&Column> {
        filter_columns(self.store.columns(), self.store.tasks(), &self.search_query)
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Add an entry to the activity log (newest first)
    pub fn record_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_limit);
    }

    /// Activity log, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    // =========================================================================
    // Unknown ids
    // =========================================================================

    /// Outcome for a command naming a column that does not exist
    pub(crate) fn missing_column(&self, id: &ColumnId) -> Result<Value> {
        if self.config.strict {
            return Err(BoardError::ColumnNotFound { id: id.to_string() });
        }
        debug!(column = %id, "unknown column, ignoring");
        Ok(json!({ "changed": false }))
    }

    /// Outcome for a command naming a task that does not exist
    pub(crate) fn missing_task(&self, id: &TaskId) -> Result<Value> {
        if self.config.strict {
            return Err(BoardError::TaskNotFound { id: id.to_string() });
        }
        debug!(task = %id, "unknown task, ignoring");
        Ok(json!({ "changed": false }))
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
