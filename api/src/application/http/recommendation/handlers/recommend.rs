use axum::extract::State;
use nutriplan_core::domain::recommendation::{
    entities::RecommendationResult, ports::RecommendationService,
};

use crate::application::http::{
    recommendation::validators::RecommendRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recommendation",
    summary = "Recommend a daily meal plan",
    description = "Computes the patient's daily calorie target and samples breakfast, lunch and dinner from the food dataset, filtered by the primary condition",
    responses(
        (status = 200, body = RecommendationResult),
        (status = 422, body = ErrorResponse, description = "Invalid patient profile"),
        (status = 500, body = ErrorResponse, description = "Dataset missing or unusable")
    ),
    request_body = RecommendRequest
)]
pub async fn recommend(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendRequest>,
) -> Result<Response<RecommendationResult>, ApiError> {
    let result = state
        .service
        .recommend(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
