#![forbid(unsafe_code)]

use crate::error::ListError;
use crate::ids::TodoId;
use crate::list::{MatchMode, TodoList};
use crate::model::Todo;

/// In-memory backend: an ordered `Vec` with linear scans and no
/// durability. Not synchronized; single-threaded by contract, callers
/// that share it wrap it in a mutex.
#[derive(Debug, Default)]
pub struct MemoryList {
    todos: Vec<Todo>,
    mode: MatchMode,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::with_mode(MatchMode::default())
    }

    pub fn with_mode(mode: MatchMode) -> Self {
        Self {
            todos: Vec::new(),
            mode,
        }
    }

    fn index_of(&self, id: TodoId) -> Result<usize, ListError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(ListError::NotFound(id))
    }
}

impl TodoList for MemoryList {
    fn add(&mut self, description: &str) -> Result<Todo, ListError> {
        let todo = Todo::new(description);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    fn rename(&mut self, id: TodoId, name: &str) -> Result<Todo, ListError> {
        let i = self.index_of(id)?;
        self.todos[i].description = name.trim().to_string();
        self.todos[i].updated_at_ms = crate::time::now_ms();
        Ok(self.todos[i].clone())
    }

    fn todos(&self) -> Result<Vec<Todo>, ListError> {
        Ok(self.todos.clone())
    }

    fn toggle_done(&mut self, id: TodoId) -> Result<Todo, ListError> {
        let i = self.index_of(id)?;
        self.todos[i].complete = !self.todos[i].complete;
        self.todos[i].updated_at_ms = crate::time::now_ms();
        Ok(self.todos[i].clone())
    }

    fn delete(&mut self, id: TodoId) -> Result<(), ListError> {
        let i = self.index_of(id)?;
        self.todos.remove(i);
        Ok(())
    }

    fn reorder(&mut self, ids: &[String]) -> Result<(), ListError> {
        // Parse everything up front so a malformed id leaves the list
        // untouched.
        let ids = ids
            .iter()
            .map(|id| TodoId::parse(id))
            .collect::<Result<Vec<_>, _>>()?;

        for todo in &mut self.todos {
            if let Some(position) = ids.iter().position(|id| *id == todo.id) {
                todo.rank = position as i64;
            }
        }
        // Stable sort: items not named in `ids` keep their prior
        // relative order among themselves.
        self.todos.sort_by_key(|todo| todo.rank);
        Ok(())
    }

    fn search(&self, term: &str) -> Result<Vec<Todo>, ListError> {
        Ok(self
            .todos
            .iter()
            .filter(|todo| self.mode.matches(&todo.description, term))
            .cloned()
            .collect())
    }

    fn get(&self, id: TodoId) -> Result<Todo, ListError> {
        let i = self.index_of(id)?;
        Ok(self.todos[i].clone())
    }

    fn empty(&mut self) -> Result<(), ListError> {
        self.todos.clear();
        Ok(())
    }
}
