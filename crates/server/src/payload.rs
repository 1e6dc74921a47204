#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use todo_core::Todo;

/// One todo item on the wire. Timestamps stay integer epoch-ms, ids
/// are UUID text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoBody {
    pub id: String,
    pub description: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    pub complete: bool,
    pub rank: i64,
}

impl From<Todo> for TodoBody {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            description: todo.description,
            created_at_ms: todo.created_at_ms,
            updated_at_ms: todo.updated_at_ms,
            complete: todo.complete,
            rank: todo.rank,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}
