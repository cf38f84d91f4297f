use std::path::PathBuf;

use clap::Parser;
use nutriplan_core::domain::common::{DatasetConfig, NutriplanConfig, SamplerConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriplan-api", version, about = "Nutriplan meal recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Skip the Prometheus layer and the `/metrics` route.
    #[arg(long, env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatasetArgs {
    /// Directory holding the food dataset CSV files. Defaults to
    /// `FINAL FOOD DATASET` in the working directory or its parent.
    #[arg(long, env = "DATASET_DIR")]
    pub dataset_dir: Option<PathBuf>,

    /// Seed for meal sampling, makes every response reproducible.
    #[arg(long, env = "SAMPLER_SEED")]
    pub sampler_seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Default tracing filter, overridden by `RUST_LOG`.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for NutriplanConfig {
    fn from(args: Args) -> Self {
        NutriplanConfig {
            dataset: DatasetConfig {
                dataset_dir: args.dataset.dataset_dir,
            },
            sampler: SamplerConfig {
                seed: args.dataset.sampler_seed,
            },
        }
    }
}
