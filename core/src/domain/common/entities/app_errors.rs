use thiserror::Error;

/// Broad class of a [`CoreError`], used by callers to decide how a failure
/// is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dataset location missing or empty.
    Configuration,
    /// Dataset present but its columns cannot be mapped.
    Schema,
    /// The caller sent an unusable profile.
    Validation,
    Unexpected,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Dataset folder not found")]
    DatasetNotFound,

    #[error("No CSV files found")]
    NoDatasetFiles,

    #[error("Required columns missing in CSV: {0}")]
    MissingRequiredColumns(String),

    #[error("Invalid patient profile: {0}")]
    InvalidProfile(String),

    #[error("Failed to read dataset: {0}")]
    DatasetRead(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::DatasetNotFound | CoreError::NoDatasetFiles => ErrorKind::Configuration,
            CoreError::MissingRequiredColumns(_) => ErrorKind::Schema,
            CoreError::InvalidProfile(_) => ErrorKind::Validation,
            CoreError::DatasetRead(_) | CoreError::InternalServerError => ErrorKind::Unexpected,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(error: std::io::Error) -> Self {
        CoreError::DatasetRead(error.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(error: csv::Error) -> Self {
        CoreError::DatasetRead(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        assert_eq!(CoreError::DatasetNotFound.kind(), ErrorKind::Configuration);
        assert_eq!(CoreError::NoDatasetFiles.kind(), ErrorKind::Configuration);
        assert_eq!(
            CoreError::MissingRequiredColumns("name".into()).kind(),
            ErrorKind::Schema
        );
        assert_eq!(
            CoreError::InvalidProfile("weight_kg".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CoreError::DatasetRead("boom".into()).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            CoreError::DatasetNotFound.to_string(),
            "Dataset folder not found"
        );
        assert_eq!(
            CoreError::MissingRequiredColumns("name, calories".into()).to_string(),
            "Required columns missing in CSV: name, calories"
        );
    }
}
