//! Domain DTOs for the todo API.
//!
//! # Design
//! The backend addresses items by their position in the list, so `Todo`
//! carries no identifier. These types mirror the mock-server's schema but are
//! defined independently; integration tests catch any schema drift.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by `GET /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new todo. The server defaults `completed`
/// to false, so only the title is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// The backend's reply to a mutation (or to a single-item lookup that missed).
///
/// Both shapes arrive with HTTP 200, so the body has to be inspected to tell
/// them apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Ack {
    Accepted { message: String },
    Rejected { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_without_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_without_title_is_rejected() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_sends_only_title() {
        let json = serde_json::to_value(CreateTodo {
            title: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "title": "x" }));
    }

    #[test]
    fn ack_distinguishes_message_from_error() {
        let ok: Ack = serde_json::from_str(r#"{"message":"Todo added"}"#).unwrap();
        assert_eq!(
            ok,
            Ack::Accepted {
                message: "Todo added".to_string()
            }
        );

        let err: Ack = serde_json::from_str(r#"{"error":"Invalid index"}"#).unwrap();
        assert_eq!(
            err,
            Ack::Rejected {
                error: "Invalid index".to_string()
            }
        );
    }
}
