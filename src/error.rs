//! Errors surfaced by the consumer handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::backend::FetchError;

/// A backend failure the handler does not turn into a message.
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    #[error("backend '{backend}' failed: {source}")]
    Backend {
        backend: String,
        #[source]
        source: FetchError,
    },
}

impl IntoResponse for ConsumerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled backend failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
