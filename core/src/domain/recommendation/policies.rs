use crate::domain::dataset::{
    entities::FoodItem,
    schema::{ColumnMap, SemanticField},
};

/// Carbohydrate cap per item for diabetic patients.
pub const DIABETES_CARBOHYDRATE_CAP: f64 = 25.0;

/// Fat cap per item for obesity and heart conditions.
pub const LOW_FAT_CAP: f64 = 10.0;

/// Extra nutrient rule selected from the patient's condition.
///
/// At most one overlay applies. Diabetes takes priority, so a combined
/// "DIABETES, HEART DISEASE" condition only gets the carbohydrate cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOverlay {
    LowCarbohydrate,
    LowFat,
    None,
}

impl ConditionOverlay {
    /// Pick the overlay for an already uppercased condition.
    pub fn from_condition(condition: &str) -> Self {
        if condition.contains("DIABETES") {
            ConditionOverlay::LowCarbohydrate
        } else if condition.contains("OBESITY") || condition.contains("HEART") {
            ConditionOverlay::LowFat
        } else {
            ConditionOverlay::None
        }
    }

    /// The nutrient and cap this overlay enforces, if any.
    pub fn cap(self) -> Option<(SemanticField, f64)> {
        match self {
            ConditionOverlay::LowCarbohydrate => {
                Some((SemanticField::Carbohydrates, DIABETES_CARBOHYDRATE_CAP))
            }
            ConditionOverlay::LowFat => Some((SemanticField::Fat, LOW_FAT_CAP)),
            ConditionOverlay::None => None,
        }
    }
}

fn nutrient_value(item: &FoodItem, field: SemanticField) -> f64 {
    match field {
        SemanticField::Calories => item.calories,
        SemanticField::Protein => item.protein,
        SemanticField::Carbohydrates => item.carbohydrates,
        SemanticField::Fat => item.fat,
        SemanticField::Name => 0.0,
    }
}

/// Keep the items a patient may be offered.
///
/// Every item must fit under `meal_ceiling`. The overlay cap is only enforced
/// when its nutrient column exists in the dataset.
pub fn filter_pool(
    items: &[FoodItem],
    meal_ceiling: f64,
    overlay: ConditionOverlay,
    columns: &ColumnMap,
) -> Vec<FoodItem> {
    let cap = overlay
        .cap()
        .filter(|(field, _)| columns.is_resolved(*field));

    if let (Some((field, _)), None) = (overlay.cap(), cap) {
        tracing::debug!(
            "{:?} overlay skipped, dataset has no {} column",
            overlay,
            field
        );
    }

    items
        .iter()
        .filter(|item| item.calories <= meal_ceiling)
        .filter(|item| match cap {
            Some((field, limit)) => nutrient_value(item, field) <= limit,
            None => true,
        })
        .cloned()
        .collect()
}
