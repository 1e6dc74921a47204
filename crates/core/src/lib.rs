#![forbid(unsafe_code)]

mod error;
mod ids;
mod list;
mod memory;
mod model;
pub mod time;

pub use error::ListError;
pub use ids::TodoId;
pub use list::{MatchMode, TodoList};
pub use memory::MemoryList;
pub use model::Todo;
