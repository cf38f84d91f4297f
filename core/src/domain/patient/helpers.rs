use chrono::{Datelike, NaiveDate};

use crate::domain::patient::{
    entities::{Gender, PatientProfile},
    policies::{DEFAULT_AGE_YEARS, DOB_FORMATS, MEALS_PER_DAY, SEDENTARY_ACTIVITY_MULTIPLIER},
};

/// Parse a date of birth with the first matching entry of [`DOB_FORMATS`].
pub fn parse_date_of_birth(dob: &str) -> Option<NaiveDate> {
    DOB_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(dob, format).ok())
}

/// Whole years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (birth.month(), birth.day());
    today.year() - birth.year() - i32::from(birthday_pending)
}

/// Age from a raw date of birth, or [`DEFAULT_AGE_YEARS`] when it can't be parsed.
pub fn calculate_age(dob: &str, today: NaiveDate) -> i32 {
    match parse_date_of_birth(dob) {
        Some(birth) => age_on(birth, today),
        None => {
            tracing::warn!(
                dob,
                "unrecognised date of birth, assuming age {}",
                DEFAULT_AGE_YEARS
            );
            DEFAULT_AGE_YEARS
        }
    }
}

/// Basal metabolic rate, Mifflin-St Jeor.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, gender: Gender, age: i32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Other => base - 161.0,
    }
}

/// Daily and per-meal calorie budget for a patient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieTarget {
    pub age: i32,
    pub bmr: f64,
    pub daily_calories: f64,
}

impl CalorieTarget {
    pub fn for_profile(profile: &PatientProfile, today: NaiveDate) -> Self {
        let age = calculate_age(&profile.dob, today);
        let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.gender(), age);

        Self {
            age,
            bmr,
            daily_calories: bmr * SEDENTARY_ACTIVITY_MULTIPLIER,
        }
    }

    /// Upper calorie bound for any single meal item.
    pub fn per_meal_ceiling(&self) -> f64 {
        self.daily_calories / MEALS_PER_DAY
    }
}
