//! Error responses of the web layer.

use crate::libs::messages::Message;
use crate::libs::task::TaskError;
use crate::libs::view::View;
use crate::{msg_debug, msg_error};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Anything that can end a request early.
///
/// Rendered as the HTML error page with a status derived from the variant:
/// unknown tasks and pages give 404, validation failures 400, everything
/// else 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
    #[error("storage worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("no page at {0}")]
    PageNotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Task(TaskError::NotFound(_)) | AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Task(TaskError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Task(TaskError::Storage(_)) | AppError::Render(_) | AppError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the visitor. Internal details stay in the log.
    fn message(&self) -> Message {
        match self {
            AppError::Task(TaskError::NotFound(id)) => Message::TaskNotFoundWithId(*id),
            AppError::Task(TaskError::Validation(field)) => Message::TaskFieldRequired(field.to_string()),
            AppError::PageNotFound(_) => Message::PageNotFound,
            _ => Message::InternalError,
        }
    }

    fn log(&self) {
        match self {
            AppError::Task(TaskError::Storage(e)) => msg_error!(Message::StorageFailed(e.to_string())),
            AppError::Render(e) => msg_error!(Message::TemplateRenderFailed(e.to_string())),
            AppError::Worker(e) => msg_error!(Message::StorageWorkerFailed(e.to_string())),
            AppError::Task(TaskError::NotFound(id)) => msg_debug!(Message::TaskNotFoundWithId(*id)),
            AppError::Task(TaskError::Validation(field)) => msg_debug!(Message::TaskFieldRequired(field.to_string())),
            AppError::PageNotFound(path) => msg_debug!(Message::PageNotFoundAt(path.clone())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("Error");
        let body = View::error(status.as_u16(), reason, &self.message());

        (status, Html(body)).into_response()
    }
}
