//! End-to-end board behaviour: deletes, undo/redo and drags

use kanban_board::{
    column::{AddColumn, DeleteColumn, MoveColumn},
    history::{RedoOperation, UndoOperation},
    task::{AddTask, DeleteTask, MoveTask},
    BoardConfig, BoardContext, Column, ColumnId, EntityStore, Execute, HistoryEntry, RedoOrder,
    Task, TaskId,
};

fn column(id: &str, title: &str) -> Column {
    Column {
        id: ColumnId::from_string(id),
        title: title.to_string(),
    }
}

fn task(id: &str, column_id: &str, content: &str) -> Task {
    Task {
        id: TaskId::from_string(id),
        column_id: ColumnId::from_string(column_id),
        content: content.to_string(),
    }
}

fn board(columns: Vec<Column>, tasks: Vec<Task>, config: BoardConfig) -> BoardContext {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    BoardContext::with_store(EntityStore::with_entities(columns, tasks), config)
}

#[test]
fn test_delete_column_then_undo_restores_everything() {
    let mut ctx = board(
        vec![column("1", "A"), column("2", "B")],
        vec![task("10", "1", "x")],
        BoardConfig::default(),
    );

    DeleteColumn::new("1").execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().columns(), &[column("2", "B")]);
    assert!(ctx.store().tasks().is_empty());
    assert_eq!(ctx.history().undo_len(), 1);
    match &ctx.history().undo_entries()[0] {
        HistoryEntry::DeleteColumn { column: placed, tasks } => {
            assert_eq!(placed.item, column("1", "A"));
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].item, task("10", "1", "x"));
        }
        other => panic!("unexpected entry: {other:?}"),
    }

    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().columns(), &[column("1", "A"), column("2", "B")]);
    assert_eq!(ctx.store().tasks(), &[task("10", "1", "x")]);
    assert_eq!(ctx.history().redo_len(), 1);
    assert!(!ctx.history().can_undo());
}

#[test]
fn test_column_with_many_tasks_round_trips() {
    let mut ctx = board(
        vec![column("a", "Todo"), column("b", "Done")],
        vec![
            task("1", "a", "one"),
            task("2", "b", "two"),
            task("3", "a", "three"),
            task("4", "a", "four"),
        ],
        BoardConfig::default(),
    );
    let before = (ctx.store().columns().to_vec(), ctx.store().tasks().to_vec());

    DeleteColumn::new("a").execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().tasks(), &[task("2", "b", "two")]);

    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    let after_undo = (ctx.store().columns().to_vec(), ctx.store().tasks().to_vec());
    assert_eq!(after_undo, before);

    RedoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().columns(), &[column("b", "Done")]);
    assert_eq!(ctx.store().tasks(), &[task("2", "b", "two")]);

    // undo then redo lands on the pre-undo state
    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    RedoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().columns(), &[column("b", "Done")]);
    assert_eq!(ctx.store().tasks(), &[task("2", "b", "two")]);
}

#[test]
fn test_delete_task_round_trip() {
    let mut ctx = board(
        vec![column("a", "Todo")],
        vec![task("1", "a", "one"), task("2", "a", "two"), task("3", "a", "three")],
        BoardConfig::default(),
    );

    DeleteTask::new("2").execute(&mut ctx).into_result().unwrap();
    let deleted = ctx.store().tasks().to_vec();

    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(
        ctx.store().tasks(),
        &[task("1", "a", "one"), task("2", "a", "two"), task("3", "a", "three")]
    );

    RedoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.store().tasks(), deleted.as_slice());
}

#[test]
fn test_undo_on_empty_history_changes_nothing() {
    let mut ctx = board(
        vec![column("a", "Todo")],
        vec![task("1", "a", "one")],
        BoardConfig::default(),
    );
    let result = UndoOperation::new().execute(&mut ctx);
    assert!(!result.should_log());
    assert_eq!(ctx.store().column_count(), 1);
    assert_eq!(ctx.store().task_count(), 1);
    assert!(!ctx.history().can_undo());
    assert!(!ctx.history().can_redo());
}

#[test]
fn test_new_delete_clears_redo() {
    let mut ctx = board(
        vec![column("a", "A"), column("b", "B"), column("c", "C")],
        vec![],
        BoardConfig::default(),
    );
    DeleteColumn::new("a").execute(&mut ctx).into_result().unwrap();
    DeleteColumn::new("b").execute(&mut ctx).into_result().unwrap();
    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.history().redo_len(), 2);

    DeleteColumn::new("c").execute(&mut ctx).into_result().unwrap();
    assert!(!ctx.history().can_redo());
}

#[test]
fn test_create_after_undo_clears_redo() {
    let mut ctx = board(vec![column("a", "A")], vec![], BoardConfig::default());
    DeleteColumn::new("a").execute(&mut ctx).into_result().unwrap();
    UndoOperation::new().execute(&mut ctx).into_result().unwrap();
    assert!(ctx.history().can_redo());

    AddTask::new("a").execute(&mut ctx).into_result().unwrap();
    assert!(!ctx.history().can_redo());
}

#[test]
fn test_redo_order_lifo_and_fifo() {
    for (order, first_back) in [(RedoOrder::Lifo, "a"), (RedoOrder::Fifo, "b")] {
        let mut ctx = board(
            vec![column("a", "A"), column("b", "B")],
            vec![],
            BoardConfig::default().with_redo_order(order),
        );
        DeleteColumn::new("a").execute(&mut ctx).into_result().unwrap();
        DeleteColumn::new("b").execute(&mut ctx).into_result().unwrap();
        UndoOperation::new().execute(&mut ctx).into_result().unwrap(); // restores b
        UndoOperation::new().execute(&mut ctx).into_result().unwrap(); // restores a

        // LIFO redoes the most recent undo (a) first
        RedoOperation::new().execute(&mut ctx).into_result().unwrap();
        assert!(
            ctx.store().column(&ColumnId::from_string(first_back)).is_none(),
            "{order:?} should redo the delete of {first_back} first"
        );
    }
}

#[test]
fn test_cross_column_task_drag() {
    let mut ctx = board(
        vec![column("colA", "A"), column("colB", "B")],
        vec![task("10", "colA", "x"), task("20", "colB", "y")],
        BoardConfig::default(),
    );

    MoveTask::new("10", "20").execute(&mut ctx).into_result().unwrap();

    let tasks = ctx.store().tasks();
    assert_eq!(tasks[1].id, TaskId::from_string("10"));
    assert_eq!(tasks[1].column_id, ColumnId::from_string("colB"));
    assert_eq!(tasks[0].id, TaskId::from_string("20"));
    assert_eq!(ctx.store().tasks_in_column(&ColumnId::from_string("colA")).count(), 0);
}

#[test]
fn test_column_drag() {
    let mut ctx = board(
        vec![column("a", "A"), column("b", "B"), column("c", "C")],
        vec![],
        BoardConfig::default(),
    );
    MoveColumn::new("c", "a").execute(&mut ctx).into_result().unwrap();
    let titles: Vec<_> = ctx.store().columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[test]
fn test_unknown_ids_are_no_ops() {
    let mut ctx = board(vec![column("a", "A")], vec![], BoardConfig::default());

    let value = DeleteColumn::new("missing").execute(&mut ctx).into_result().unwrap();
    assert_eq!(value["changed"], false);
    let value = DeleteTask::new("missing").execute(&mut ctx).into_result().unwrap();
    assert_eq!(value["changed"], false);
    MoveColumn::new("a", "missing").execute(&mut ctx).into_result().unwrap();

    assert_eq!(ctx.store().column_count(), 1);
    assert!(!ctx.history().can_undo());
}

#[test]
fn test_default_titles_follow_count() {
    let mut ctx = BoardContext::default();
    AddColumn::new().execute(&mut ctx).into_result().unwrap();
    let second = AddColumn::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(second["title"], "Column 2");

    let id = second["id"].as_str().unwrap();
    AddTask::new(id).execute(&mut ctx).into_result().unwrap();
    let task = AddTask::new(id).execute(&mut ctx).into_result().unwrap();
    assert_eq!(task["content"], "Task 2");
}
