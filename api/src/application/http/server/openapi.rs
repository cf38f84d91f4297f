use crate::application::http::{
    health::HealthApiDoc, recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriplan API",
        description = "Calorie targets and condition-aware meal recommendations"
    ),
    tags(
        (name = "recommendation", description = "Meal plan recommendation"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The complete document, with every route module merged in.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RecommendationApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let openapi = ApiDoc::build();
        assert!(openapi.paths.paths.contains_key("/recommend"));
        assert!(openapi.paths.paths.contains_key("/health"));
    }
}
