use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Successful handler output, serialized as the JSON body.
#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}
