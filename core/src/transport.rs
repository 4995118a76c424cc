//! The seam between the deterministic core and the host's HTTP stack.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and hands back the raw `HttpResponse`.
///
/// Implementations return non-2xx statuses as data; only failures that
/// produce no response at all map to `ApiError::Transport`. Status
/// interpretation stays in `TodoClient`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
