use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{common::SamplerConfig, dataset::ports::FoodDatasetRepository};

/// Application service wiring the domain to its adapters.
///
/// Holds no mutable state, so clones can serve requests concurrently.
#[derive(Clone)]
pub struct Service<D>
where
    D: FoodDatasetRepository,
{
    pub(crate) dataset_repository: Arc<D>,
    pub(crate) sampler: SamplerConfig,
}

impl<D> Service<D>
where
    D: FoodDatasetRepository,
{
    pub fn new(dataset_repository: D, sampler: SamplerConfig) -> Self {
        Self {
            dataset_repository: Arc::new(dataset_repository),
            sampler,
        }
    }

    /// Random source for a single request.
    pub(crate) fn request_rng(&self) -> StdRng {
        match self.sampler.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
