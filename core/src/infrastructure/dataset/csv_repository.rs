use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info, instrument};

use crate::domain::{
    common::{DatasetConfig, entities::app_errors::CoreError},
    dataset::{
        entities::{DatasetRow, RawDataset},
        ports::FoodDatasetRepository,
    },
};

/// Reads every `.csv` file of a dataset directory and merges them.
///
/// The directory is located and read again on each load; nothing is cached.
#[derive(Debug, Clone)]
pub struct CsvDatasetRepository {
    candidate_dirs: Vec<PathBuf>,
}

impl CsvDatasetRepository {
    pub fn new(config: &DatasetConfig) -> Self {
        Self::with_candidates(config.candidate_dirs())
    }

    pub fn with_candidates(candidate_dirs: Vec<PathBuf>) -> Self {
        Self { candidate_dirs }
    }

    async fn locate_dir(&self) -> Result<PathBuf, CoreError> {
        for dir in &self.candidate_dirs {
            if tokio::fs::metadata(dir)
                .await
                .map(|meta| meta.is_dir())
                .unwrap_or(false)
            {
                return Ok(dir.clone());
            }
        }

        debug!(candidates = ?self.candidate_dirs, "no dataset directory found");
        Err(CoreError::DatasetNotFound)
    }

    async fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_csv = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.to_lowercase().ends_with(".csv"));

            if is_csv && tokio::fs::metadata(&path).await?.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

impl FoodDatasetRepository for CsvDatasetRepository {
    #[instrument(skip(self))]
    async fn load_dataset(&self) -> Result<RawDataset, CoreError> {
        let dir = self.locate_dir().await?;
        let files = Self::list_csv_files(&dir).await?;

        if files.is_empty() {
            return Err(CoreError::NoDatasetFiles);
        }

        let mut dataset = RawDataset::new();
        for path in &files {
            let contents = tokio::fs::read(path).await?;
            let rows = append_csv(&mut dataset, &contents).map_err(|e| {
                tracing::error!("Failed to parse {}: {}", path.display(), e);
                e
            })?;
            debug!(file = %path.display(), rows, "loaded dataset file");
        }

        info!(
            dir = %dir.display(),
            files = files.len(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "loaded food dataset"
        );

        Ok(dataset)
    }
}

/// Rename headers the way pandas does: a blank header at position `i` becomes
/// `Unnamed: i` and repeats of `X` become `X.1`, `X.2`, ...
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());

    for (index, header) in raw.iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {index}")
        } else {
            header.clone()
        };

        let mut name = base.clone();
        while headers.contains(&name) {
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            name = format!("{base}.{count}");
        }

        headers.push(name);
    }

    headers
}

fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// Parse one CSV document into `dataset`, returning the number of rows added.
///
/// Invalid UTF-8 is replaced rather than rejected and ragged rows are kept.
pub fn append_csv(dataset: &mut RawDataset, contents: &[u8]) -> Result<usize, CoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);

    let raw_headers: Vec<String> = reader.byte_headers()?.iter().map(decode).collect();
    let headers = normalize_headers(&raw_headers);
    dataset.add_columns(&headers);

    let mut record = ByteRecord::new();
    let mut rows = 0usize;
    while reader.read_byte_record(&mut record)? {
        let row: DatasetRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(decode))
            .collect();
        dataset.push_row(row);
        rows += 1;
    }

    Ok(rows)
}
