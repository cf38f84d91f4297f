use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriplan_core::domain::common::entities::app_errors::{CoreError, ErrorKind};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Dataset location missing or holding no CSV files.
    #[error("{0}")]
    Configuration(String),

    /// Dataset columns could not be mapped.
    #[error("{0}")]
    Schema(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_DATASET_UNAVAILABLE",
            ),
            ApiError::Schema(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E_DATASET_SCHEMA"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION"),
            ApiError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
            ),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error.kind() {
            ErrorKind::Configuration => ApiError::Configuration(message),
            ErrorKind::Schema => ApiError::Schema(message),
            ErrorKind::Validation => ApiError::Validation(message),
            ErrorKind::Unexpected => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, "{}", self);
        } else {
            tracing::debug!(code, "{}", self);
        }

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}
