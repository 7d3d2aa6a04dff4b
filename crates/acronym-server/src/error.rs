//! Server error type and its HTTP mapping

use acronym_core::AcronymError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] AcronymError),

    #[error("Template error")]
    Template(#[from] minijinja::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Background task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    /// Plain-text body sent to the client
    fn public_message(&self) -> &'static str {
        match self {
            ServerError::Store(e) if e.is_unwritable() => "Error saving YAML file",
            ServerError::Store(_) => "Error parsing YAML file",
            ServerError::Template(_) => "Error rendering page",
            ServerError::Io(_) | ServerError::Task(_) => "Internal server error",
        }
    }

    /// This error followed by each of its causes, colon separated
    fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.chain());
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}
