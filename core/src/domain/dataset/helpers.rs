use crate::domain::dataset::{
    entities::{DatasetRow, FoodItem, RawDataset},
    schema::{ColumnMap, SemanticField},
};

/// Value used for any nutrient cell that cannot be read as a number.
pub const NUMERIC_FALLBACK: f64 = 0.0;

/// Parse a nutrient cell, falling back to [`NUMERIC_FALLBACK`].
///
/// Returns the value and whether the fallback was used. Missing cells, blank
/// cells, garbage and `NaN` all fall back.
pub fn coerce_numeric(cell: Option<&str>) -> (f64, bool) {
    match cell.map(str::trim).map(str::parse::<f64>) {
        Some(Ok(value)) if !value.is_nan() => (value, false),
        _ => (NUMERIC_FALLBACK, true),
    }
}

fn nutrient(row: &DatasetRow, column: Option<&str>, coerced: &mut usize) -> f64 {
    let Some(column) = column else {
        return NUMERIC_FALLBACK;
    };

    let (value, fell_back) = coerce_numeric(row.get(column).map(String::as_str));
    if fell_back {
        *coerced += 1;
    }
    value
}

/// Turn raw rows into food items using the resolved columns.
///
/// Malformed numeric data never fails the conversion; it is zeroed instead.
pub fn normalize_dataset(dataset: &RawDataset, columns: &ColumnMap) -> Vec<FoodItem> {
    let mut coerced = 0usize;

    let items: Vec<FoodItem> = dataset
        .rows()
        .iter()
        .map(|row| FoodItem {
            // blank or absent names stay empty rather than the literal "nan"
            name: row.get(&columns.name).cloned().unwrap_or_default(),
            calories: nutrient(row, columns.column(SemanticField::Calories), &mut coerced),
            protein: nutrient(row, columns.column(SemanticField::Protein), &mut coerced),
            carbohydrates: nutrient(
                row,
                columns.column(SemanticField::Carbohydrates),
                &mut coerced,
            ),
            fat: nutrient(row, columns.column(SemanticField::Fat), &mut coerced),
        })
        .collect();

    if coerced > 0 {
        tracing::debug!(
            rows = items.len(),
            coerced,
            "replaced unparseable nutrient cells with {}",
            NUMERIC_FALLBACK
        );
    }

    items
}
