#![forbid(unsafe_code)]

use crate::ids::TodoId;
use crate::time::now_ms;

/// A single task record. Timestamps are UTC milliseconds since epoch;
/// `rank` only controls relative display order (ascending) and need not
/// be contiguous or unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    pub complete: bool,
    pub rank: i64,
}

impl Todo {
    /// A fresh, incomplete item. The rank starts at the creation
    /// timestamp so default order is creation order; later items always
    /// sort at or after earlier ones.
    pub fn new(description: &str) -> Self {
        let now_ms = now_ms();
        Self {
            id: TodoId::new(),
            description: description.trim().to_string(),
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
            complete: false,
            rank: now_ms,
        }
    }
}
