//! Board configuration loaded with Figment
//!
//! Sources, later overriding earlier:
//! 1. Defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed `KANBAN_` (e.g. `KANBAN_REDO_ORDER=fifo`)

use crate::error::{BoardError, Result};
use crate::history::RedoOrder;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Prefix of environment variables read by [`BoardConfig::load`]
pub const ENV_PREFIX: &str = "KANBAN_";

/// Settings of one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Blob key holding the columns
    pub columns_key: String,
    /// Blob key holding the tasks
    pub tasks_key: String,
    /// Which undone entry redo replays first
    pub redo_order: RedoOrder,
    /// Maximum number of undoable entries kept (unbounded when unset)
    pub history_limit: Option<usize>,
    /// Fail commands that name unknown ids instead of ignoring them
    pub strict: bool,
    /// Number of activity log entries kept in memory
    pub activity_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns_key: "columns".to_string(),
            tasks_key: "tasks".to_string(),
            redo_order: RedoOrder::default(),
            history_limit: None,
            strict: false,
            activity_limit: 100,
        }
    }
}

impl BoardConfig {
    /// Load from defaults, an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        debug!(?config, "loaded board configuration");
        Ok(config)
    }

    /// The layered configuration sources
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.columns_key.trim().is_empty() {
            return Err(BoardError::invalid_value("columns_key", "must not be empty"));
        }
        if self.tasks_key.trim().is_empty() {
            return Err(BoardError::invalid_value("tasks_key", "must not be empty"));
        }
        if self.columns_key == self.tasks_key {
            return Err(BoardError::invalid_value(
                "tasks_key",
                "must differ from columns_key",
            ));
        }
        if self.activity_limit == 0 {
            return Err(BoardError::invalid_value("activity_limit", "must be at least 1"));
        }
        if self.history_limit == Some(0) {
            return Err(BoardError::invalid_value("history_limit", "must be at least 1"));
        }
        Ok(())
    }

    pub fn with_redo_order(mut self, order: RedoOrder) -> Self {
        self.redo_order = order;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
