#![forbid(unsafe_code)]

use rusqlite::{Connection, Transaction};
use todo_core::ListError;

/// Unit-of-work helper for multi-step operations: begin, run `f`
/// against the transaction, commit on success. On any failure the
/// transaction is dropped uncommitted, which rolls back every partial
/// write (rusqlite rolls back on drop, so panics are covered too).
pub(super) fn with_tx<T>(
    conn: &mut Connection,
    f: impl FnOnce(&Transaction<'_>) -> Result<T, ListError>,
) -> Result<T, ListError> {
    let tx = conn.transaction().map_err(ListError::storage)?;
    let value = f(&tx)?;
    tx.commit().map_err(ListError::storage)?;
    Ok(value)
}
