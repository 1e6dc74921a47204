#![forbid(unsafe_code)]

use rusqlite::Row;
use todo_core::{ListError, Todo, TodoId};

// Completion is stored as a two-valued enumeration rather than a
// native boolean; the schema CHECK-constrains the column to these.
const COMPLETE_YES: &str = "Y";
const COMPLETE_NO: &str = "N";

pub(super) fn complete_flag(complete: bool) -> &'static str {
    if complete { COMPLETE_YES } else { COMPLETE_NO }
}

/// Column values of one `todos` row, before id/flag decoding.
pub(super) struct TodoRow {
    pub id: String,
    pub task: String,
    pub created: i64,
    pub updated: i64,
    pub complete: String,
    pub rank: i64,
}

pub(super) fn read_row(row: &Row<'_>) -> rusqlite::Result<TodoRow> {
    Ok(TodoRow {
        id: row.get(0)?,
        task: row.get(1)?,
        created: row.get(2)?,
        updated: row.get(3)?,
        complete: row.get(4)?,
        rank: row.get(5)?,
    })
}

pub(super) fn to_todo(row: TodoRow) -> Result<Todo, ListError> {
    Ok(Todo {
        id: TodoId::parse(&row.id)?,
        description: row.task,
        created_at_ms: row.created,
        updated_at_ms: row.updated,
        complete: row.complete == COMPLETE_YES,
        rank: row.rank,
    })
}
