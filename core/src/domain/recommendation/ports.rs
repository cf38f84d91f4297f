use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, patient::entities::PatientProfile,
    recommendation::entities::RecommendationResult,
};

/// Service trait for meal recommendation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        profile: PatientProfile,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;
}
