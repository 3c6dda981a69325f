use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<mealcart_shared::Error> for AppError {
    fn from(err: mealcart_shared::Error) -> Self {
        match err {
            mealcart_shared::Error::Validate(e) => AppError::ValidationError(e.to_string()),
            mealcart_shared::Error::Catalog(e) => AppError::CatalogUnavailable(e),
            mealcart_shared::Error::Store(e) => AppError::StoreError(e),
            mealcart_shared::Error::Unknown(e) => AppError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::CatalogUnavailable(msg) => {
                tracing::warn!("Catalog unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Product catalog is temporarily unavailable. Please retry.".to_string(),
                )
            }
            AppError::StoreError(msg) => {
                tracing::error!("Store error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
