use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, dataset::entities::RawDataset};

/// Source of the food dataset. Implementations are read fresh on every call.
#[cfg_attr(test, mockall::automock)]
pub trait FoodDatasetRepository: Send + Sync {
    fn load_dataset(&self) -> impl Future<Output = Result<RawDataset, CoreError>> + Send;
}
