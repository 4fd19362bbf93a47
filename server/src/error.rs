//! Mapping from service failures to HTTP responses.
//!
//! Not-found failures become 404 and validation failures 400, both with the
//! failure message as a plain-text body. Storage faults are logged and
//! answered with a generic 500 so driver details never reach clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::ServiceError;
use tracing::error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            ServiceError::Repository(err) => {
                error!(error = %err, "storage failure");
                (status, INTERNAL_MESSAGE).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
