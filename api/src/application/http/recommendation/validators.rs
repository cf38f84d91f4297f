use nutriplan_core::domain::patient::entities::{DEFAULT_CONDITION, PatientProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendRequest {
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be greater than 0"))]
    #[schema(example = 70.0)]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0, message = "height_cm must be greater than 0"))]
    #[schema(example = 170.0)]
    pub height_cm: f64,
    #[schema(example = "male")]
    pub gender: String,
    /// `YYYY-MM-DD`, `DD/MM/YYYY` or `YYYY/MM/DD`
    #[schema(example = "1990-05-01")]
    pub dob: String,
    /// Defaults to `NONE`
    #[schema(example = "DIABETES")]
    pub primary_condition: Option<String>,
}

impl From<RecommendRequest> for PatientProfile {
    fn from(request: RecommendRequest) -> Self {
        PatientProfile {
            full_name: request.full_name,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            gender: request.gender,
            dob: request.dob,
            primary_condition: request
                .primary_condition
                .unwrap_or_else(|| DEFAULT_CONDITION.to_string()),
        }
    }
}
