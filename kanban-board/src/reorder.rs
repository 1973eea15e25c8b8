//! List reordering for drag and drop.
//!
//! A move event says "the active item now sits where the over item was". These
//! functions compute the resulting sequence without touching their input.

use crate::types::{Identified, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which sequence a move event applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Column,
    Task,
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// All other elements keep their relative order. Out-of-range indices leave
/// the sequence unchanged.
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    move_in_place(&mut out, from, to);
    out
}

fn move_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

fn locate<T: Identified>(items: &[T], active: &T::Id, over: &T::Id) -> Option<(usize, usize)> {
    let from = items.iter().position(|item| item.id() == active)?;
    let to = items.iter().position(|item| item.id() == over)?;
    Some((from, to))
}

/// Move the item `active` to the position currently held by `over`.
///
/// Returns the input unchanged when `active == over` or when either id is absent.
pub fn reorder<T>(items: &[T], active: &T::Id, over: &T::Id) -> Vec<T>
where
    T: Identified + Clone,
{
    if active == over {
        return items.to_vec();
    }
    match locate(items, active, over) {
        Some((from, to)) => move_index(items, from, to),
        None => {
            debug!("reorder target not found, sequence unchanged");
            items.to_vec()
        }
    }
}

/// Move task `active` onto task `over`, re-parenting it first when the two
/// tasks live in different columns.
pub fn reorder_tasks(tasks: &[Task], active: &TaskId, over: &TaskId) -> Vec<Task> {
    let mut out = tasks.to_vec();
    if active == over {
        return out;
    }
    let Some((from, to)) = locate(tasks, active, over) else {
        debug!(%active, %over, "task move target not found, sequence unchanged");
        return out;
    };

    if out[from].column_id != out[to].column_id {
        debug!(
            task = %active,
            from = %out[from].column_id,
            to = %out[to].column_id,
            "task changes column"
        );
        out[from].column_id = out[to].column_id.clone();
    }
    move_in_place(&mut out, from, to);
    out
}
