#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use todo_core::{ListError, TodoId, TodoList};

use crate::payload::{
    AddRequest, ErrorBody, HealthBody, ListParams, RenameRequest, ReorderRequest, TodoBody,
};

/// Shared state: one list behind one mutex. The service logic is
/// single-threaded by contract, so the caller serializes access.
#[derive(Clone)]
pub struct AppState {
    list: Arc<Mutex<Box<dyn TodoList>>>,
}

impl AppState {
    pub fn new(list: Box<dyn TodoList>) -> Self {
        Self {
            list: Arc::new(Mutex::new(list)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(add_todo))
        .route("/todos/sort", post(reorder_todos))
        .route(
            "/todos/{id}",
            get(get_todo).patch(rename_todo).delete(delete_todo),
        )
        .route("/todos/{id}/toggle", post(toggle_todo))
        .with_state(state)
}

/// Error response with the status the list-service taxonomy maps to:
/// not-found → 404, bad input → 400/422, backend failure → 500.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn unprocessable(message: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.to_string(),
        }
    }

    fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        let status = match &err {
            ListError::NotFound(_) => StatusCode::NOT_FOUND,
            ListError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ListError::Storage(_) => {
                tracing::error!(error = %err, "list operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

fn lock_list(state: &AppState) -> Result<MutexGuard<'_, Box<dyn TodoList>>, ApiError> {
    state
        .list
        .lock()
        .map_err(|_| ApiError::internal("todo list lock poisoned"))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TodoBody>>, ApiError> {
    let list = lock_list(&state)?;
    let todos = match params.search {
        Some(term) => list.search(&term)?,
        None => list.todos()?,
    };
    Ok(Json(todos.into_iter().map(TodoBody::from).collect()))
}

async fn add_todo(
    State(state): State<AppState>,
    Json(body): Json<AddRequest>,
) -> Result<(StatusCode, Json<TodoBody>), ApiError> {
    let description = body.description.trim();
    if description.is_empty() {
        // Emptiness policy lives here, not in the service.
        return Err(ApiError::unprocessable("description must not be empty"));
    }
    let mut list = lock_list(&state)?;
    let todo = list.add(description)?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoBody>, ApiError> {
    let id = TodoId::parse(&id)?;
    let list = lock_list(&state)?;
    Ok(Json(list.get(id)?.into()))
}

async fn rename_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RenameRequest>,
) -> Result<Json<TodoBody>, ApiError> {
    let id = TodoId::parse(&id)?;
    let mut list = lock_list(&state)?;
    let name = body.name.trim();
    // An empty new name is filtered here: the item is returned
    // unchanged instead of being renamed to nothing.
    let todo = if name.is_empty() {
        list.get(id)?
    } else {
        list.rename(id, name)?
    };
    Ok(Json(todo.into()))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoBody>, ApiError> {
    let id = TodoId::parse(&id)?;
    let mut list = lock_list(&state)?;
    Ok(Json(list.toggle_done(id)?.into()))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = TodoId::parse(&id)?;
    let mut list = lock_list(&state)?;
    list.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reorder_todos(
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Vec<TodoBody>>, ApiError> {
    let mut list = lock_list(&state)?;
    list.reorder(&body.ids)?;
    let todos = list.todos()?;
    Ok(Json(todos.into_iter().map(TodoBody::from).collect()))
}
