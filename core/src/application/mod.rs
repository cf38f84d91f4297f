use crate::{
    domain::common::{NutriplanConfig, services::Service},
    infrastructure::dataset::CsvDatasetRepository,
};

pub type NutriplanService = Service<CsvDatasetRepository>;

pub fn create_service(config: NutriplanConfig) -> NutriplanService {
    let dataset_repository = CsvDatasetRepository::new(&config.dataset);
    tracing::debug!(
        seeded = config.sampler.seed.is_some(),
        "created recommendation service"
    );

    Service::new(dataset_repository, config.sampler)
}
