//! Client-side list state kept in step with the server's collection.
//!
//! # Design
//! `TodoList` never patches its local copy. Every mutation is followed by a
//! full re-fetch, and the fetched sequence replaces `todos` wholesale. The
//! outcome of each user-level operation is kept in a `Status` slot so a view
//! can show failures instead of dropping them.
//!
//! Positions are the only handle the backend offers, so mutations take an
//! index into the last-fetched list. Indices outside that snapshot are
//! refused locally before any request is sent.

use std::fmt;

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo};

/// The user-level operation a `Status` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Delete,
    Complete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Fetch => "fetch",
            Operation::Add => "add",
            Operation::Delete => "delete",
            Operation::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Outcome of the most recent operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// The operation succeeded. `message` is the server's acknowledgement, if any.
    Done {
        operation: Operation,
        message: Option<String>,
    },
    Failed { operation: Operation, error: ApiError },
}

/// Stateful to-do list client: mirrors the server list and drives mutations.
#[derive(Debug)]
pub struct TodoList<T> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    title: String,
    status: Status,
}

impl<T: Transport> TodoList<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            title: String::new(),
            status: Status::Idle,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Pending input for the next `add_todo`.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Initial population of the list.
    pub fn mount(&mut self) -> Result<(), ApiError> {
        self.fetch_todos()
    }

    /// Replace the local list with the server's. On failure the previous list
    /// is kept.
    pub fn fetch_todos(&mut self) -> Result<(), ApiError> {
        match self.refresh() {
            Ok(()) => {
                self.status = Status::Done {
                    operation: Operation::Fetch,
                    message: None,
                };
                Ok(())
            }
            Err(e) => {
                self.fail(Operation::Fetch, e.clone());
                Err(e)
            }
        }
    }

    /// Look up a single item on the server without touching local state.
    pub fn get_todo(&self, index: usize) -> Result<Todo, ApiError> {
        let response = self.transport.execute(self.client.build_get_todo(index))?;
        self.client.parse_get_todo(response)
    }

    /// Submit the pending title as a new todo, then re-fetch.
    ///
    /// The pending title is cleared before the request goes out, so it ends
    /// up empty whatever the server answers. No validation or deduplication.
    pub fn add_todo(&mut self) -> Result<Option<String>, ApiError> {
        let input = CreateTodo {
            title: std::mem::take(&mut self.title),
        };
        debug!(title = %input.title, "adding todo");
        let outcome = self.client.build_create_todo(&input).and_then(|request| {
            let response = self.transport.execute(request)?;
            self.client.parse_create_todo(response)
        });
        self.settle(Operation::Add, outcome)
    }

    /// Delete the item at `index` in the last-fetched list, then re-fetch.
    pub fn delete_todo(&mut self, index: usize) -> Result<Option<String>, ApiError> {
        if let Err(e) = self.check_index(index) {
            self.fail(Operation::Delete, e.clone());
            return Err(e);
        }
        debug!(index, "deleting todo");
        let request = self.client.build_delete_todo(index);
        let outcome = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_todo(response));
        self.settle(Operation::Delete, outcome)
    }

    /// Mark the item at `index` in the last-fetched list complete, then re-fetch.
    pub fn mark_complete(&mut self, index: usize) -> Result<Option<String>, ApiError> {
        if let Err(e) = self.check_index(index) {
            self.fail(Operation::Complete, e.clone());
            return Err(e);
        }
        debug!(index, "completing todo");
        let request = self.client.build_complete_todo(index);
        let outcome = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_complete_todo(response));
        self.settle(Operation::Complete, outcome)
    }

    fn refresh(&mut self) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_list_todos())?;
        let todos = self.client.parse_list_todos(response)?;
        debug!(count = todos.len(), "fetched todos");
        self.todos = todos;
        Ok(())
    }

    /// Re-fetch after a mutation, whatever its outcome, and record the status.
    /// A failed re-fetch takes precedence in `status` since the list is stale.
    fn settle(
        &mut self,
        operation: Operation,
        outcome: Result<Option<String>, ApiError>,
    ) -> Result<Option<String>, ApiError> {
        if let Err(e) = &outcome {
            warn!(%operation, error = %e, "mutation failed");
        }
        match self.refresh() {
            Ok(()) => {
                self.status = match &outcome {
                    Ok(message) => Status::Done {
                        operation,
                        message: message.clone(),
                    },
                    Err(e) => Status::Failed {
                        operation,
                        error: e.clone(),
                    },
                };
                outcome
            }
            Err(fetch_error) => {
                self.fail(Operation::Fetch, fetch_error.clone());
                outcome?;
                Err(fetch_error)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ApiError> {
        if index < self.todos.len() {
            Ok(())
        } else {
            Err(ApiError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            })
        }
    }

    fn fail(&mut self, operation: Operation, error: ApiError) {
        warn!(%operation, error = %error, "operation failed");
        self.status = Status::Failed { operation, error };
    }
}
