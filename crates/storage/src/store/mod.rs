#![forbid(unsafe_code)]

mod row;
mod tx;

use row::{complete_flag, read_row, to_todo};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::time::Duration;
use todo_core::{ListError, MatchMode, Todo, TodoId, TodoList, time::now_ms};
use tx::with_tx;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id       TEXT PRIMARY KEY,
    task     TEXT NOT NULL,
    created  INTEGER NOT NULL,
    updated  INTEGER NOT NULL,
    complete TEXT NOT NULL DEFAULT 'N' CHECK (complete IN ('Y','N')),
    rank     INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_todos_rank ON todos(rank);
"#;

/// Persistent backend: the list-service contract mapped onto one
/// SQLite table. Single-statement operations run directly on the
/// connection; multi-step operations go through [`with_tx`] so a
/// failure rolls back every partial write.
#[derive(Debug)]
pub struct SqliteList {
    conn: Connection,
    mode: MatchMode,
}

impl SqliteList {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, ListError> {
        Self::open_with_mode(db_path, MatchMode::default())
    }

    pub fn open_with_mode(db_path: impl AsRef<Path>, mode: MatchMode) -> Result<Self, ListError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(ListError::storage)?;
        }
        let conn = Connection::open(db_path).map_err(ListError::storage)?;
        Self::from_conn(conn, mode)
    }

    /// Throwaway database for tests; nothing survives the handle.
    pub fn open_in_memory() -> Result<Self, ListError> {
        let conn = Connection::open_in_memory().map_err(ListError::storage)?;
        Self::from_conn(conn, MatchMode::default())
    }

    fn from_conn(conn: Connection, mode: MatchMode) -> Result<Self, ListError> {
        conn.busy_timeout(BUSY_TIMEOUT).map_err(ListError::storage)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(ListError::storage)?;
        conn.execute_batch(SCHEMA).map_err(ListError::storage)?;
        Ok(Self { conn, mode })
    }
}

impl TodoList for SqliteList {
    fn add(&mut self, description: &str) -> Result<Todo, ListError> {
        let todo = Todo::new(description);
        self.conn
            .execute(
                r#"
                INSERT INTO todos(id, task, created, updated, complete, rank)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    todo.id.to_string(),
                    todo.description,
                    todo.created_at_ms,
                    todo.updated_at_ms,
                    complete_flag(todo.complete),
                    todo.rank,
                ],
            )
            .map_err(ListError::storage)?;
        Ok(todo)
    }

    fn rename(&mut self, id: TodoId, name: &str) -> Result<Todo, ListError> {
        let name = name.trim().to_string();
        with_tx(&mut self.conn, |tx| {
            let affected = tx
                .execute(
                    "UPDATE todos SET task = ?2, updated = ?3 WHERE id = ?1",
                    params![id.to_string(), name, now_ms()],
                )
                .map_err(ListError::storage)?;
            if affected == 0 {
                return Err(ListError::NotFound(id));
            }
            select_todo(tx, id)?.ok_or(ListError::NotFound(id))
        })
    }

    fn todos(&self) -> Result<Vec<Todo>, ListError> {
        select_all(&self.conn)
    }

    fn toggle_done(&mut self, id: TodoId) -> Result<Todo, ListError> {
        with_tx(&mut self.conn, |tx| {
            let affected = tx
                .execute(
                    r#"
                    UPDATE todos
                    SET complete = CASE complete WHEN 'Y' THEN 'N' ELSE 'Y' END,
                        updated = ?2
                    WHERE id = ?1
                    "#,
                    params![id.to_string(), now_ms()],
                )
                .map_err(ListError::storage)?;
            if affected == 0 {
                return Err(ListError::NotFound(id));
            }
            select_todo(tx, id)?.ok_or(ListError::NotFound(id))
        })
    }

    fn delete(&mut self, id: TodoId) -> Result<(), ListError> {
        let affected = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id.to_string()])
            .map_err(ListError::storage)?;
        if affected == 0 {
            return Err(ListError::NotFound(id));
        }
        Ok(())
    }

    fn reorder(&mut self, ids: &[String]) -> Result<(), ListError> {
        // Parse everything up front so a malformed id fails before any
        // write happens.
        let ids = ids
            .iter()
            .map(|id| TodoId::parse(id))
            .collect::<Result<Vec<_>, _>>()?;

        with_tx(&mut self.conn, |tx| {
            // Partial policy: rows whose id is absent from the input
            // keep their rank, so a stale client ordering cannot drop
            // items.
            for todo in select_all(tx)? {
                if let Some(position) = ids.iter().position(|id| *id == todo.id) {
                    tx.execute(
                        "UPDATE todos SET rank = ?2 WHERE id = ?1",
                        params![todo.id.to_string(), position as i64],
                    )
                    .map_err(ListError::storage)?;
                }
            }
            Ok(())
        })
    }

    fn search(&self, term: &str) -> Result<Vec<Todo>, ListError> {
        let pattern = match self.mode {
            MatchMode::Substring => format!("%{term}%"),
            MatchMode::Prefix => format!("{term}%"),
        };
        // SQLite LIKE is case-insensitive for ASCII, matching the
        // contract; `%` and `_` in the term act as wildcards.
        let mut stmt = self
            .conn
            .prepare(
                r#"
                SELECT id, task, created, updated, complete, rank
                FROM todos
                WHERE task LIKE ?1
                ORDER BY rank ASC, created ASC, id ASC
                "#,
            )
            .map_err(ListError::storage)?;
        let rows = stmt
            .query_map(params![pattern], read_row)
            .map_err(ListError::storage)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(ListError::storage)?;
        rows.into_iter().map(to_todo).collect()
    }

    fn get(&self, id: TodoId) -> Result<Todo, ListError> {
        select_todo(&self.conn, id)?.ok_or(ListError::NotFound(id))
    }

    fn empty(&mut self) -> Result<(), ListError> {
        self.conn
            .execute("DELETE FROM todos", [])
            .map_err(ListError::storage)?;
        Ok(())
    }
}

// Shared SELECTs, usable inside and outside a transaction
// (`Transaction` derefs to `Connection`).

fn select_todo(conn: &Connection, id: TodoId) -> Result<Option<Todo>, ListError> {
    conn.query_row(
        r#"
        SELECT id, task, created, updated, complete, rank
        FROM todos
        WHERE id = ?1
        "#,
        params![id.to_string()],
        read_row,
    )
    .optional()
    .map_err(ListError::storage)?
    .map(to_todo)
    .transpose()
}

fn select_all(conn: &Connection) -> Result<Vec<Todo>, ListError> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, task, created, updated, complete, rank
            FROM todos
            ORDER BY rank ASC, created ASC, id ASC
            "#,
        )
        .map_err(ListError::storage)?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(ListError::storage)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(ListError::storage)?;
    rows.into_iter().map(to_todo).collect()
}
