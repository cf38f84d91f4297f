use chrono::NaiveDate;
use rand::Rng;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dataset::{entities::RawDataset, helpers::normalize_dataset, schema::resolve_columns},
    patient::{entities::PatientProfile, helpers::CalorieTarget},
    recommendation::{
        entities::{MealPlan, MealType, PatientInfo, RecommendationResult, RecommendationStatus},
        policies::{ConditionOverlay, filter_pool},
        sampler::{round2, sample_meal},
    },
};

/// Run the whole recommendation pipeline over an already loaded dataset.
///
/// `today` drives the age calculation and `rng` the meal draws, both are
/// injected so the result is reproducible. The profile is expected to have
/// passed [`PatientProfile::validate`] already.
pub fn build_recommendation<R>(
    profile: &PatientProfile,
    dataset: &RawDataset,
    today: NaiveDate,
    rng: &mut R,
) -> Result<RecommendationResult, CoreError>
where
    R: Rng + ?Sized,
{
    let columns = resolve_columns(dataset.columns())?;
    let foods = normalize_dataset(dataset, &columns);

    let target = CalorieTarget::for_profile(profile, today);
    let condition = profile.condition();
    let overlay = ConditionOverlay::from_condition(&condition);

    let pool = filter_pool(&foods, target.per_meal_ceiling(), overlay, &columns);

    tracing::info!(
        age = target.age,
        daily_calories = target.daily_calories,
        ?overlay,
        dataset_rows = foods.len(),
        pool_size = pool.len(),
        "filtered food pool"
    );

    let mut meals = MealPlan::default();
    for meal_type in MealType::ALL {
        *meals.meal_mut(meal_type) = sample_meal(&pool, meal_type, rng);
    }

    Ok(RecommendationResult {
        status: RecommendationStatus::Success,
        patient_info: PatientInfo {
            full_name: profile.full_name.clone(),
            daily_calories: round2(target.daily_calories),
            condition,
        },
        meals,
    })
}
