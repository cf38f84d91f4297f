use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

/// Directory name searched for when no dataset directory is configured.
pub const DEFAULT_DATASET_DIR_NAME: &str = "FINAL FOOD DATASET";

#[derive(Clone, Debug, Default)]
pub struct NutriplanConfig {
    pub dataset: DatasetConfig,
    pub sampler: SamplerConfig,
}

#[derive(Clone, Debug, Default)]
pub struct DatasetConfig {
    /// Explicit dataset directory. When unset the default directory name is
    /// looked up in the working directory and then its parent.
    pub dataset_dir: Option<PathBuf>,
}

impl DatasetConfig {
    /// Directories to probe for the dataset, in priority order.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        if let Some(dir) = &self.dataset_dir {
            return vec![dir.clone()];
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut candidates = vec![cwd.join(DEFAULT_DATASET_DIR_NAME)];
        if let Some(parent) = cwd.parent() {
            candidates.push(parent.join(DEFAULT_DATASET_DIR_NAME));
        }
        candidates
    }
}

#[derive(Clone, Debug, Default)]
pub struct SamplerConfig {
    /// Fixed seed for meal sampling. `None` draws fresh entropy per request.
    pub seed: Option<u64>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dataset_dir_is_the_only_candidate() {
        let config = DatasetConfig {
            dataset_dir: Some(PathBuf::from("/data/foods")),
        };
        assert_eq!(config.candidate_dirs(), vec![PathBuf::from("/data/foods")]);
    }

    #[test]
    fn default_candidates_use_the_dataset_dir_name() {
        let candidates = DatasetConfig::default().candidate_dirs();
        assert!(!candidates.is_empty());
        assert!(
            candidates
                .iter()
                .all(|dir| dir.ends_with(DEFAULT_DATASET_DIR_NAME))
        );
    }
}
