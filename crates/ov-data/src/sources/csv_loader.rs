use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tracing::debug;
use ov_core::{CalciteRecord, DataLoadError, DataLoader, DatasetKind, GridPoint, TemperatureRecord};

use crate::{DataConfig, DataError};

/// Loads the three datasets from CSV files on disk
pub struct CsvDataLoader {
    config: DataConfig,
    name: String,
}

impl CsvDataLoader {
    pub fn new(config: DataConfig) -> Self {
        let name = config.data_dir.display().to_string();
        Self { config, name }
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Read one dataset on the blocking pool
    async fn load<T>(&self, dataset: DatasetKind) -> Result<Vec<T>, DataLoadError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = self.config.path_for(dataset);
        debug!("Reading {} from {:?}", dataset, path);

        tokio::task::spawn_blocking(move || read_records::<T>(&path, dataset.columns()))
            .await
            .map_err(DataError::from)
            .and_then(|rows| rows)
            .map_err(|e| e.into_load_error(dataset))
    }
}

/// Decode every row of a CSV file whose header names all of `columns`.
/// Fields are trimmed; a row that fails to decode aborts the read with its
/// 1-based data row number. Header problems are reported as row 0.
pub fn read_records<T: DeserializeOwned>(path: &Path, columns: &[&str]) -> Result<Vec<T>, DataError> {
    let file = File::open(path)?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let headers = csv_reader.headers()?;
    if headers.iter().all(str::is_empty) {
        return Err(DataError::Header("missing header row".to_string()));
    }
    let missing: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DataError::Header(format!("missing columns: {}", missing.join(", "))));
    }

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                return Err(DataError::Row {
                    row: idx + 1,
                    message: e.to_string(),
                })
            }
        }
    }

    Ok(rows)
}

#[async_trait]
impl DataLoader for CsvDataLoader {
    async fn load_grid(&self) -> Result<Vec<GridPoint>, DataLoadError> {
        self.load(DatasetKind::SstMap).await
    }

    async fn load_temperature(&self) -> Result<Vec<TemperatureRecord>, DataLoadError> {
        self.load(DatasetKind::Temperature).await
    }

    async fn load_calcite(&self) -> Result<Vec<CalciteRecord>, DataLoadError> {
        self.load(DatasetKind::Calcite).await
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
