#![forbid(unsafe_code)]

use crate::error::ListError;
use uuid::Uuid;

/// Identifier of a single todo item. Assigned at creation, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an id received from the outside (HTTP paths, reorder
    /// payloads). Malformed input is a validation error, never a panic.
    pub fn parse(value: &str) -> Result<Self, ListError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ListError::InvalidId(value.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
