use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorReply;

/// Errors the stand-in chatbot endpoint answers with. The messages are the
/// ones the widget's real backend sends.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Corpo da requisição deve conter 'message'")]
    MissingMessage,

    #[error("Mensagem vazia")]
    EmptyMessage,

    #[error("Falha simulada do chatbot")]
    SimulatedFailure,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingMessage | AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::SimulatedFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorReply { error: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}
