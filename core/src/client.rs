//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Items are addressed by their position in the last-fetched list; the
//! backend has no other identifier.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ack, CreateTodo, Todo};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, index: usize) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item_path(index))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The completion toggle carries no body: the backend only ever sets the
    /// flag to true.
    pub fn build_complete_todo(&self, index: usize) -> HttpRequest {
        self.bare(HttpMethod::Patch, self.item_path(index))
    }

    pub fn build_delete_todo(&self, index: usize) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item_path(index))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// A miss comes back as 200 with `{"error": ...}`, surfaced as `Rejected`.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        if let Ok(Ack::Rejected { error }) = serde_json::from_str::<Ack>(&response.body) {
            return Err(ApiError::Rejected(error));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Option<String>, ApiError> {
        parse_ack(response)
    }

    pub fn parse_complete_todo(&self, response: HttpResponse) -> Result<Option<String>, ApiError> {
        parse_ack(response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Option<String>, ApiError> {
        parse_ack(response)
    }

    fn item_path(&self, index: usize) -> String {
        format!("{}/todos/{index}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Mutation replies are otherwise ignored, so a 2xx body that is not an
/// acknowledgement still counts as success, just without a message.
fn parse_ack(response: HttpResponse) -> Result<Option<String>, ApiError> {
    check_status(&response)?;
    match serde_json::from_str::<Ack>(&response.body) {
        Ok(Ack::Accepted { message }) => Ok(Some(message)),
        Ok(Ack::Rejected { error }) => Err(ApiError::Rejected(error)),
        Err(_) => Ok(None),
    }
}
