//! Persistence collaborators
//!
//! The board is persisted as two JSON blobs (columns and tasks) in a key-value
//! store. Blobs are read once when a board is opened and written back after
//! every change by [`BlobPersister`].

use crate::config::BoardConfig;
use crate::error::Result;
use crate::store::{StoreChange, StoreObserver};
use crate::types::{Column, Task};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, error};

/// A get/set store of JSON blobs
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: &Value) -> Result<()>;
}

/// In-memory blob store. Clones share the same blobs.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob
    pub fn with_blob(self, key: impl Into<String>, value: Value) -> Self {
        self.blobs.borrow_mut().insert(key.into(), value);
        self
    }

    /// Current value of a blob
    pub fn snapshot(&self, key: &str) -> Option<Value> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.snapshot(key))
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        self.blobs.borrow_mut().insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Blob store backed by one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(value)?;
        atomic_write(&self.blob_path(key), content.as_bytes())
    }
}

/// Write via a temp file + rename so readers never see a partial blob
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

fn read_blob<T: DeserializeOwned>(blobs: &dyn BlobStore, key: &str) -> Result<Vec<T>> {
    match blobs.get(key)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Read the columns and tasks blobs. Missing blobs are empty boards.
pub fn load_entities(
    blobs: &dyn BlobStore,
    config: &BoardConfig,
) -> Result<(Vec<Column>, Vec<Task>)> {
    let columns: Vec<Column> = read_blob(blobs, &config.columns_key)?;
    let tasks: Vec<Task> = read_blob(blobs, &config.tasks_key)?;
    debug!(
        columns = columns.len(),
        tasks = tasks.len(),
        "loaded board from blob store"
    );
    Ok((columns, tasks))
}

/// Store observer that writes changed sequences back to a blob store
pub struct BlobPersister {
    blobs: Box<dyn BlobStore>,
    columns_key: String,
    tasks_key: String,
}

impl BlobPersister {
    pub fn new(blobs: impl BlobStore + 'static, config: &BoardConfig) -> Self {
        Self {
            blobs: Box::new(blobs),
            columns_key: config.columns_key.clone(),
            tasks_key: config.tasks_key.clone(),
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, items: &[T]) {
        let result = serde_json::to_value(items)
            .map_err(Into::into)
            .and_then(|value| self.blobs.set(key, &value));
        match result {
            Ok(()) => debug!(key, count = items.len(), "persisted blob"),
            Err(e) => error!(key, error = %e, "failed to persist blob"),
        }
    }
}

impl StoreObserver for BlobPersister {
    fn store_changed(&mut self, change: StoreChange, columns: &[Column], tasks: &[Task]) {
        if change.touches_columns() {
            let key = self.columns_key.clone();
            self.write(&key, columns);
        }
        if change.touches_tasks() {
            let key = self.tasks_key.clone();
            self.write(&key, tasks);
        }
    }
}
