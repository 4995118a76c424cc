//! In-memory todo backend addressed by list position.
//!
//! Every reply is HTTP 200; a bad index is reported in the body as
//! `{"error": "Invalid index"}`. Only extractor rejections (malformed JSON,
//! non-integer path) produce other statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `POST /todos`. Same shape as a stored item.
pub type CreateTodo = Todo;

/// Acknowledgement returned by mutations and by missed lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ack {
    Message { message: String },
    Error { error: String },
}

impl Ack {
    fn message(text: &str) -> Json<Self> {
        Json(Ack::Message {
            message: text.to_string(),
        })
    }

    fn invalid_index() -> Json<Self> {
        Json(Ack::Error {
            error: "Invalid index".to_string(),
        })
    }
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{index}",
            get(get_todo).delete(delete_todo).patch(complete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "serving todos");
    }
    axum::serve(listener, app()).await
}

/// Negative or past-the-end indices address nothing.
fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Json<Ack> {
    debug!(title = %input.title, "todo added");
    db.write().await.push(input);
    Ack::message("Todo added")
}

async fn get_todo(
    State(db): State<Db>,
    Path(index): Path<i64>,
) -> Result<Json<Todo>, Json<Ack>> {
    let todos = db.read().await;
    position(index, todos.len())
        .map(|i| Json(todos[i].clone()))
        .ok_or_else(Ack::invalid_index)
}

async fn delete_todo(State(db): State<Db>, Path(index): Path<i64>) -> Json<Ack> {
    let mut todos = db.write().await;
    match position(index, todos.len()) {
        Some(i) => {
            let removed = todos.remove(i);
            debug!(index = i, title = %removed.title, "todo deleted");
            Ack::message("Todo deleted")
        }
        None => Ack::invalid_index(),
    }
}

async fn complete_todo(State(db): State<Db>, Path(index): Path<i64>) -> Json<Ack> {
    let mut todos = db.write().await;
    let Some(i) = position(index, todos.len()) else {
        return Ack::invalid_index();
    };
    let todo = &mut todos[i];
    if todo.completed {
        return Ack::message("Todo already marked as complete");
    }
    todo.completed = true;
    debug!(index = i, "todo completed");
    Ack::message("Todo marked as complete")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Test", "completed": false }));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ack_serializes_as_single_key_object() {
        let json = serde_json::to_value(&*Ack::invalid_index()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid index" }));
        let json = serde_json::to_value(&*Ack::message("Todo added")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Todo added" }));
    }

    #[test]
    fn position_rejects_negative_and_past_end() {
        assert_eq!(position(0, 1), Some(0));
        assert_eq!(position(1, 1), None);
        assert_eq!(position(-1, 3), None);
        assert_eq!(position(0, 0), None);
    }
}
