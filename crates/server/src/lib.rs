#![forbid(unsafe_code)]

mod handlers;
pub mod payload;

pub use handlers::{AppState, create_router};
