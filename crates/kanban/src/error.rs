// File: src/error.rs
// Purpose: Request-aborting failures raised by controllers

use crate::response::Reply;
use crate::views;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Conditions that abort a request instead of re-rendering a form
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The project or category in the URL does not exist
    #[error("page not found")]
    NotFound,

    /// Anti-forgery token missing or wrong
    #[error("invalid anti-forgery token")]
    Forbidden,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ControllerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ControllerError::NotFound => StatusCode::NOT_FOUND,
            ControllerError::Forbidden => StatusCode::FORBIDDEN,
            ControllerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        let page = match &self {
            ControllerError::NotFound => views::errors::not_found(),
            ControllerError::Forbidden => views::errors::forbidden(),
            ControllerError::Database(e) => {
                error!(error = %e, "database error while handling request");
                views::errors::server_error()
            }
        };

        Reply::html(page).status(self.status()).into_response()
    }
}

pub type ControllerResult = Result<Reply, ControllerError>;
