use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One dataset row keyed by column name. Cells a source file did not carry
/// are simply absent.
pub type DatasetRow = HashMap<String, String>;

/// Rows merged from every file of a food dataset, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    columns: Vec<String>,
    rows: Vec<DatasetRow>,
}

impl RawDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from a header line and positional records.
    ///
    /// Records shorter than the header leave the trailing cells absent,
    /// extra cells are dropped.
    pub fn from_records<H, R, C>(headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut dataset = Self::new();
        dataset.add_columns(&headers);

        for record in records {
            let row = headers
                .iter()
                .cloned()
                .zip(record.into_iter().map(Into::into))
                .collect();
            dataset.push_row(row);
        }

        dataset
    }

    /// Register columns, keeping first-seen order and skipping ones already known.
    pub fn add_columns(&mut self, columns: &[String]) {
        for column in columns {
            if !self.columns.contains(column) {
                self.columns.push(column.clone());
            }
        }
    }

    pub fn push_row(&mut self, row: DatasetRow) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A dataset row after schema resolution and numeric normalization.
///
/// Nutrients are per serving as given by the dataset and default to zero when
/// their column is absent or a cell is unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}
