//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Not-found responses carry no body.
        match self {
            AppError::NotFound(_) | AppError::Db(sqlx::Error::RowNotFound) => {
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: "database_error".into(),
                        message: format!("database: {}", e),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
