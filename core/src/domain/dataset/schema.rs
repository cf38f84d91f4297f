use std::collections::HashMap;
use std::fmt;

use crate::domain::common::entities::app_errors::CoreError;

/// Canonical fields a food dataset must be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    Name,
    Calories,
    Protein,
    Carbohydrates,
    Fat,
}

impl SemanticField {
    pub const ALL: [SemanticField; 5] = [
        SemanticField::Name,
        SemanticField::Calories,
        SemanticField::Protein,
        SemanticField::Carbohydrates,
        SemanticField::Fat,
    ];

    /// Accepted column names, highest priority first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            SemanticField::Name => &["food", "Unnamed: 1", "Name", "food_name"],
            SemanticField::Calories => &["Caloric Value", "Calories", "Energy", "calories"],
            SemanticField::Protein => &["Protein", "protein"],
            SemanticField::Carbohydrates => &["Carbohydrates", "Carbs", "carb"],
            SemanticField::Fat => &["Fat", "fat"],
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, SemanticField::Name | SemanticField::Calories)
    }

    pub fn key(self) -> &'static str {
        match self {
            SemanticField::Name => "name",
            SemanticField::Calories => "cal",
            SemanticField::Protein => "prot",
            SemanticField::Carbohydrates => "carb",
            SemanticField::Fat => "fat",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved dataset column for each semantic field.
///
/// Name and calories are always present; the optional nutrients are `None`
/// when no candidate matched and then read as zero everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: String,
    pub calories: String,
    pub protein: Option<String>,
    pub carbohydrates: Option<String>,
    pub fat: Option<String>,
}

impl ColumnMap {
    pub fn column(&self, field: SemanticField) -> Option<&str> {
        match field {
            SemanticField::Name => Some(self.name.as_str()),
            SemanticField::Calories => Some(self.calories.as_str()),
            SemanticField::Protein => self.protein.as_deref(),
            SemanticField::Carbohydrates => self.carbohydrates.as_deref(),
            SemanticField::Fat => self.fat.as_deref(),
        }
    }

    pub fn is_resolved(&self, field: SemanticField) -> bool {
        self.column(field).is_some()
    }
}

/// Find the first candidate present among `columns`, ignoring case.
///
/// Returns the dataset's own spelling of the column. When two dataset columns
/// only differ by case the later one is returned.
pub fn find_column(columns: &[String], candidates: &[&str]) -> Option<String> {
    let by_lowercase: HashMap<String, &String> = columns
        .iter()
        .map(|column| (column.to_lowercase(), column))
        .collect();

    candidates
        .iter()
        .find_map(|candidate| by_lowercase.get(&candidate.to_lowercase()))
        .map(|column| (*column).clone())
}

/// Map the dataset columns onto every semantic field.
pub fn resolve_columns(columns: &[String]) -> Result<ColumnMap, CoreError> {
    let resolve = |field: SemanticField| find_column(columns, field.candidates());

    let name = resolve(SemanticField::Name);
    let calories = resolve(SemanticField::Calories);

    let (name, calories) = match (name, calories) {
        (Some(name), Some(calories)) => (name, calories),
        (name, calories) => {
            let missing: Vec<String> = [
                (SemanticField::Name, name.is_none()),
                (SemanticField::Calories, calories.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| field.to_string())
            .collect();

            tracing::error!(?columns, "dataset lacks required columns: {:?}", missing);
            return Err(CoreError::MissingRequiredColumns(missing.join(", ")));
        }
    };

    let column_map = ColumnMap {
        name,
        calories,
        protein: resolve(SemanticField::Protein),
        carbohydrates: resolve(SemanticField::Carbohydrates),
        fat: resolve(SemanticField::Fat),
    };

    for field in SemanticField::ALL {
        if !field.is_required() && !column_map.is_resolved(field) {
            tracing::debug!("no column for optional field {}, reading it as zero", field);
        }
    }

    Ok(column_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn resolves_first_matching_candidate() {
        let map = resolve_columns(&columns(&[
            "Unnamed: 0",
            "food",
            "Caloric Value",
            "Fat",
            "Protein",
            "Carbohydrates",
        ]))
        .unwrap();

        assert_eq!(map.name, "food");
        assert_eq!(map.calories, "Caloric Value");
        assert_eq!(map.protein.as_deref(), Some("Protein"));
        assert_eq!(map.carbohydrates.as_deref(), Some("Carbohydrates"));
        assert_eq!(map.fat.as_deref(), Some("Fat"));
    }

    #[test]
    fn candidate_priority_beats_column_order() {
        // "Calories" ranks above "Energy" even though "Energy" comes first.
        let map = resolve_columns(&columns(&["Name", "Energy", "Calories"])).unwrap();
        assert_eq!(map.calories, "Calories");
    }

    #[test]
    fn matching_ignores_case_and_keeps_dataset_spelling() {
        let map = resolve_columns(&columns(&["FOOD_NAME", "ENERGY", "CARBS"])).unwrap();

        assert_eq!(map.name, "FOOD_NAME");
        assert_eq!(map.calories, "ENERGY");
        assert_eq!(map.carbohydrates.as_deref(), Some("CARBS"));
    }

    #[test]
    fn later_column_wins_a_case_collision() {
        assert_eq!(
            find_column(&columns(&["Fat", "fat"]), SemanticField::Fat.candidates()),
            Some("fat".to_string())
        );
    }

    #[test]
    fn optional_fields_may_stay_unresolved() {
        let map = resolve_columns(&columns(&["Unnamed: 1", "calories"])).unwrap();

        assert_eq!(map.name, "Unnamed: 1");
        assert!(!map.is_resolved(SemanticField::Protein));
        assert!(!map.is_resolved(SemanticField::Carbohydrates));
        assert!(!map.is_resolved(SemanticField::Fat));
    }

    #[test]
    fn missing_required_columns_is_a_schema_error() {
        let err = resolve_columns(&columns(&["title", "kcal", "Fat"])).unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingRequiredColumns("name, cal".to_string())
        );

        let err = resolve_columns(&columns(&["food", "kcal"])).unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredColumns("cal".to_string()));
    }
}
