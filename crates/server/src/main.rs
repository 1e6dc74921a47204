#![forbid(unsafe_code)]

use todo_core::{MemoryList, TodoList};
use todo_server::{AppState, create_router};
use todo_storage::SqliteList;
use tracing_subscriber::EnvFilter;

// Configuration comes from the environment:
//   TODO_DB   - SQLite file path; unset or empty selects the
//               in-memory backend (no durability).
//   TODO_ADDR - listen address.
//   RUST_LOG  - log filter.
const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The store handle is acquired here and owned by the router state
    // for the process lifetime.
    let list: Box<dyn TodoList> = match std::env::var("TODO_DB") {
        Ok(path) if !path.trim().is_empty() => {
            let path = path.trim().to_string();
            tracing::info!(db = %path, "using sqlite backend");
            Box::new(SqliteList::open(path)?)
        }
        _ => {
            tracing::info!("using in-memory backend");
            Box::new(MemoryList::new())
        }
    };

    let app = create_router(AppState::new(list));

    let addr = std::env::var("TODO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
