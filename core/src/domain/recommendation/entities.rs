use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
        }
    }
}

/// A sampled food as returned to the caller, nutrients rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
}

impl MealPlan {
    pub fn meal(&self, meal_type: MealType) -> &[MealItem] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, meal_type: MealType) -> &mut Vec<MealItem> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientInfo {
    pub full_name: String,
    /// Daily target in kcal, rounded to 2 decimals.
    pub daily_calories: f64,
    /// Uppercased primary condition.
    pub condition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub status: RecommendationStatus,
    pub patient_info: PatientInfo,
    pub meals: MealPlan,
}
