use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_CONDITION: &str = "NONE";

/// Biometric profile submitted for a single recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientProfile {
    pub full_name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// `male` (any case) selects the male formula, anything else the female one.
    pub gender: String,
    /// `YYYY-MM-DD`, `DD/MM/YYYY` or `YYYY/MM/DD`.
    pub dob: String,
    /// [`DEFAULT_CONDITION`] when the patient reports none.
    pub primary_condition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        if raw.to_lowercase() == "male" {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

impl PatientProfile {
    pub fn gender(&self) -> Gender {
        Gender::parse(&self.gender)
    }

    /// Condition used for matching, always uppercase.
    pub fn condition(&self) -> String {
        self.primary_condition.to_uppercase()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(CoreError::InvalidProfile(
                "weight_kg must be a positive number".to_string(),
            ));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(CoreError::InvalidProfile(
                "height_cm must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PatientProfile {
        PatientProfile {
            full_name: "Jane Doe".into(),
            weight_kg: 60.0,
            height_cm: 165.0,
            gender: "female".into(),
            dob: "1990-05-01".into(),
            primary_condition: "heart disease".into(),
        }
    }

    #[test]
    fn gender_match_is_case_insensitive() {
        assert_eq!(Gender::parse("MALE"), Gender::Male);
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse("female"), Gender::Other);
        assert_eq!(Gender::parse(" male"), Gender::Other);
        assert_eq!(Gender::parse(""), Gender::Other);
    }

    #[test]
    fn condition_is_uppercased() {
        assert_eq!(profile().condition(), "HEART DISEASE");
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(profile().validate().is_ok());

        let mut bad = profile();
        bad.weight_kg = 0.0;
        assert!(matches!(bad.validate(), Err(CoreError::InvalidProfile(_))));

        let mut bad = profile();
        bad.height_cm = f64::NAN;
        assert!(matches!(bad.validate(), Err(CoreError::InvalidProfile(_))));
    }
}
