//! Synchronous API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of that, `TodoList`
//! keeps a local mirror of the server's list, re-fetching it after every
//! mutation through a host-supplied `Transport`.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Items are addressed by position; the backend exposes no ids.
//! - The `ureq` feature (on by default) adds `UreqTransport`, a blocking
//!   transport for hosts that do not bring their own.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod list;
pub mod transport;
pub mod types;
#[cfg(feature = "ureq")]
pub mod ureq_transport;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::{Operation, Status, TodoList};
pub use transport::Transport;
pub use types::{Ack, CreateTodo, Todo};
#[cfg(feature = "ureq")]
pub use ureq_transport::UreqTransport;
