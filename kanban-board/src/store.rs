//! EntityStore - the current columns and tasks of a board
//!
//! The store owns both sequences and is the only place they change. Lookups
//! by unknown id are no-ops; mutators report whether anything changed so
//! callers can decide how loud to be about it. Every change is pushed to the
//! subscribed observers (persistence, re-render).

use crate::reorder::{reorder, reorder_tasks};
use crate::types::{Column, ColumnId, Placed, Task, TaskId};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Which sequences a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Columns,
    Tasks,
    Both,
}

impl StoreChange {
    pub fn touches_columns(self) -> bool {
        matches!(self, Self::Columns | Self::Both)
    }

    pub fn touches_tasks(self) -> bool {
        matches!(self, Self::Tasks | Self::Both)
    }
}

/// Receives the full board state after every change
pub trait StoreObserver {
    fn store_changed(&mut self, change: StoreChange, columns: &[Column], tasks: &[Task]);
}

/// Columns and tasks of one board, in display order
#[derive(Default)]
pub struct EntityStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("columns", &self.columns)
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously saved entities.
    ///
    /// Later duplicates of an id already seen are dropped.
    pub fn with_entities(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let columns = columns
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.id.clone());
                if !fresh {
                    warn!(column = %c.id, "dropping duplicate column id");
                }
                fresh
            })
            .collect();

        let mut seen = HashSet::new();
        let tasks = tasks
            .into_iter()
            .filter(|t| {
                let fresh = seen.insert(t.id.clone());
                if !fresh {
                    warn!(task = %t.id, "dropping duplicate task id");
                }
                fresh
            })
            .collect();

        Self {
            columns,
            tasks,
            observers: Vec::new(),
        }
    }

    /// Register an observer for subsequent changes
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, change: StoreChange) {
        for observer in &mut self.observers {
            observer.store_changed(change, &self.columns, &self.tasks);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks of a column, in board order
    pub fn tasks_in_column<'a>(&'a self, id: &'a ColumnId) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| &t.column_id == id)
    }

    /// Tasks whose column no longer exists
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.column(&t.column_id).is_none())
            .collect()
    }

    // =========================================================================
    // Create / update
    // =========================================================================

    /// Append a column with a default title ("Column N")
    pub fn create_column(&mut self) -> Column {
        let title = Column::default_title(self.columns.len());
        self.create_column_titled(title)
    }

    /// Append a column with the given title
    pub fn create_column_titled(&mut self, title: impl Into<String>) -> Column {
        let column = Column::new(title);
        debug!(column = %column.id, title = %column.title, "column created");
        self.columns.push(column.clone());
        self.notify(StoreChange::Columns);
        column
    }

    /// Replace a column's title. Returns false if the column does not exist.
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> bool {
        let Some(column) = self.columns.iter_mut().find(|c| &c.id == id) else {
            return false;
        };
        column.title = title.into();
        self.notify(StoreChange::Columns);
        true
    }

    /// Append a task with a default content ("Task N", N counted board-wide).
    ///
    /// The column is not checked for existence.
    pub fn create_task(&mut self, column_id: &ColumnId) -> Task {
        let content = Task::default_content(self.tasks.len());
        self.create_task_with_content(column_id, content)
    }

    /// Append a task with the given content
    pub fn create_task_with_content(
        &mut self,
        column_id: &ColumnId,
        content: impl Into<String>,
    ) -> Task {
        let task = Task::new(column_id, content);
        debug!(task = %task.id, column = %column_id, "task created");
        self.tasks.push(task.clone());
        self.notify(StoreChange::Tasks);
        task
    }

    /// Replace a task's content. Returns false if the task does not exist.
    pub fn edit_task_content(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.content = content.into();
        self.notify(StoreChange::Tasks);
        true
    }

    // =========================================================================
    // Remove / restore
    // =========================================================================

    /// Remove a column together with every task that points at it.
    ///
    /// Returns the column and its tasks with the indices they occupied.
    pub fn remove_column(&mut self, id: &ColumnId) -> Option<(Placed<Column>, Vec<Placed<Task>>)> {
        let index = self.columns.iter().position(|c| &c.id == id)?;
        let column = self.columns.remove(index);

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.tasks.len());
        for (i, task) in std::mem::take(&mut self.tasks).into_iter().enumerate() {
            if &task.column_id == id {
                removed.push(Placed::new(i, task));
            } else {
                kept.push(task);
            }
        }
        self.tasks = kept;

        debug!(column = %id, tasks = removed.len(), "column removed");
        self.notify(if removed.is_empty() {
            StoreChange::Columns
        } else {
            StoreChange::Both
        });
        Some((Placed::new(index, column), removed))
    }

    /// Remove a single task
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Placed<Task>> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        let task = self.tasks.remove(index);
        debug!(task = %id, "task removed");
        self.notify(StoreChange::Tasks);
        Some(Placed::new(index, task))
    }

    /// Put a removed column and its tasks back where they were.
    ///
    /// Entities whose id is already present are skipped. Returns false if
    /// nothing was inserted.
    pub fn restore_column(&mut self, column: Placed<Column>, mut tasks: Vec<Placed<Task>>) -> bool {
        let column_restored = if self.column(&column.item.id).is_some() {
            debug!(column = %column.item.id, "column already present, not restored");
            false
        } else {
            let index = column.index.min(self.columns.len());
            self.columns.insert(index, column.item);
            true
        };

        tasks.sort_by_key(|t| t.index);
        let mut tasks_restored = 0;
        for task in tasks {
            if self.insert_task(task) {
                tasks_restored += 1;
            }
        }

        let change = match (column_restored, tasks_restored > 0) {
            (true, true) => StoreChange::Both,
            (true, false) => StoreChange::Columns,
            (false, true) => StoreChange::Tasks,
            (false, false) => return false,
        };
        debug!(tasks = tasks_restored, "column restored");
        self.notify(change);
        true
    }

    /// Put a removed task back where it was
    pub fn restore_task(&mut self, task: Placed<Task>) -> bool {
        if self.column(&task.item.column_id).is_none() {
            warn!(
                task = %task.item.id,
                column = %task.item.column_id,
                "restoring task whose column does not exist"
            );
        }
        if !self.insert_task(task) {
            return false;
        }
        self.notify(StoreChange::Tasks);
        true
    }

    fn insert_task(&mut self, task: Placed<Task>) -> bool {
        if self.task(&task.item.id).is_some() {
            debug!(task = %task.item.id, "task already present, not restored");
            return false;
        }
        let index = task.index.min(self.tasks.len());
        self.tasks.insert(index, task.item);
        true
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Move column `active` to the position of column `over`
    pub fn move_column(&mut self, active: &ColumnId, over: &ColumnId) -> bool {
        let columns = reorder(&self.columns, active, over);
        if columns == self.columns {
            return false;
        }
        self.columns = columns;
        self.notify(StoreChange::Columns);
        true
    }

    /// Move task `active` onto task `over`, changing its column if needed
    pub fn move_task(&mut self, active: &TaskId, over: &TaskId) -> bool {
        let tasks = reorder_tasks(&self.tasks, active, over);
        if tasks == self.tasks {
            return false;
        }
        self.tasks = tasks;
        self.notify(StoreChange::Tasks);
        true
    }
}
