use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{models::MediaId, validation::FieldErrors};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("invalid media document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("media item {0} not found")]
    NotFound(MediaId),
    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Storage failures leave the persisted document intact, so the caller may
    /// simply try the same action again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Storage(_))
    }
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Storage(StorageError::Database(err))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0.downcast_ref::<CatalogError>() {
            Some(CatalogError::Validation(fields)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "validation failed", "fields": fields }),
            ),
            Some(err @ CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, json!({ "error": err.to_string() }))
            },
            Some(err @ CatalogError::Storage(_)) => {
                tracing::warn!(error = %err, "storage failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": err.to_string(), "retryable": true }),
                )
            },
            None => {
                tracing::error!(error = %self.0, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": self.0.to_string() }))
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
