//! Fixed policy values used by the calorie target calculation.

/// Age assumed when the date of birth matches none of [`DOB_FORMATS`].
pub const DEFAULT_AGE_YEARS: i32 = 30;

/// Accepted date of birth layouts, tried in order.
pub const DOB_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Sedentary activity factor. There is no activity level input, so every
/// patient gets this one.
pub const SEDENTARY_ACTIVITY_MULTIPLIER: f64 = 1.2;

pub const MEALS_PER_DAY: f64 = 3.0;
