#![forbid(unsafe_code)]

use crate::error::ListError;
use crate::ids::TodoId;
use crate::model::Todo;

/// How `search` compares a term against descriptions. Chosen per
/// backend instance at construction; both backends honor both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive containment anywhere in the description.
    #[default]
    Substring,
    /// Case-insensitive match against the start of the description.
    Prefix,
}

impl MatchMode {
    pub fn matches(self, description: &str, term: &str) -> bool {
        let description = description.to_lowercase();
        let term = term.to_lowercase();
        match self {
            Self::Substring => description.contains(&term),
            Self::Prefix => description.starts_with(&term),
        }
    }
}

/// The shared list-service contract. The HTTP layer depends on this
/// trait alone and never inspects which backend is behind it.
pub trait TodoList: Send {
    /// Creates an item with a fresh id and now-timestamps, appended to
    /// the end of the current ordering. Accepts any description (stored
    /// trimmed); emptiness filtering is the caller's job.
    fn add(&mut self, description: &str) -> Result<Todo, ListError>;

    /// Updates description and `updated_at_ms`; rank and completion
    /// stay as they were.
    fn rename(&mut self, id: TodoId, name: &str) -> Result<Todo, ListError>;

    /// The full collection, rank ascending.
    fn todos(&self) -> Result<Vec<Todo>, ListError>;

    /// Flips the completion flag and returns the post-toggle state.
    /// Applying it twice restores the original flag.
    fn toggle_done(&mut self, id: TodoId) -> Result<Todo, ListError>;

    fn delete(&mut self, id: TodoId) -> Result<(), ListError>;

    /// Assigns rank = position-in-sequence to every item named in
    /// `ids`; items not mentioned keep their existing rank. Any
    /// malformed id fails the whole call with no state change.
    fn reorder(&mut self, ids: &[String]) -> Result<(), ListError>;

    /// Case-insensitive description match per the backend's
    /// [`MatchMode`], results in rank order.
    fn search(&self, term: &str) -> Result<Vec<Todo>, ListError>;

    fn get(&self, id: TodoId) -> Result<Todo, ListError>;

    /// Clears the whole collection. Test/reset hook, not part of the
    /// normal user flow.
    fn empty(&mut self) -> Result<(), ListError>;
}
