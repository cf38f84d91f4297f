use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    dataset::entities::FoodItem,
    recommendation::entities::{MealItem, MealType},
};

/// Upper bound on the number of foods offered for one meal.
pub const MAX_ITEMS_PER_MEAL: usize = 5;

/// Round to two decimals on the exact decimal value, ties to even.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

impl MealItem {
    pub fn from_food(food: &FoodItem, meal_type: MealType) -> Self {
        Self {
            food_name: food.name.clone(),
            calories: round2(food.calories),
            protein: round2(food.protein),
            carbohydrates: round2(food.carbohydrates),
            fat: round2(food.fat),
            meal_type,
        }
    }
}

/// Draw up to [`MAX_ITEMS_PER_MEAL`] distinct pool entries for one meal.
pub fn sample_meal<R>(pool: &[FoodItem], meal_type: MealType, rng: &mut R) -> Vec<MealItem>
where
    R: Rng + ?Sized,
{
    let amount = MAX_ITEMS_PER_MEAL.min(pool.len());

    pool.choose_multiple(rng, amount)
        .map(|food| MealItem::from_food(food, meal_type))
        .collect()
}
