#![forbid(unsafe_code)]

use crate::ids::TodoId;

/// Everything a list operation can fail with. Callers only need to tell
/// "missing id" and "bad input" apart from backend failures, so the
/// taxonomy stays this small.
#[derive(Debug)]
pub enum ListError {
    NotFound(TodoId),
    InvalidId(String),
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl ListError {
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidId(value) => write!(f, "invalid todo id: {value:?}"),
            Self::Storage(err) => write!(f, "storage: {err}"),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
