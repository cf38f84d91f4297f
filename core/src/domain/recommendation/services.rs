use chrono::Local;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    dataset::ports::FoodDatasetRepository,
    patient::entities::PatientProfile,
    recommendation::{
        entities::RecommendationResult, helpers::build_recommendation,
        ports::RecommendationService,
    },
};

impl<D> RecommendationService for Service<D>
where
    D: FoodDatasetRepository,
{
    #[instrument(
        skip(self, profile),
        fields(recommendation_id = %generate_uuid_v7(), condition = %profile.primary_condition)
    )]
    async fn recommend(&self, profile: PatientProfile) -> Result<RecommendationResult, CoreError> {
        profile.validate()?;

        let dataset = self.dataset_repository.load_dataset().await.map_err(|e| {
            tracing::error!("Failed to load food dataset: {}", e);
            e
        })?;

        let today = Local::now().date_naive();
        let mut rng = self.request_rng();

        build_recommendation(&profile, &dataset, today, &mut rng)
    }
}
