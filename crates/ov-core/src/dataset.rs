//! Immutable datasets loaded once at startup

use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use tracing::{info, warn};

use crate::error::DataLoadError;

/// One cell of the mean SST grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "lat")]
    pub latitude: f64,
    pub value: f64,
}

/// Annual mean SST of a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub region: String,
    pub year: i32,
    #[serde(rename = "temperature_K")]
    pub temperature_k: f64,
}

/// Calcite concentration of a region at one model level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalciteRecord {
    pub region: String,
    #[serde(rename = "lev")]
    pub level: u32,
    #[serde(rename = "time")]
    pub year: i32,
    #[serde(rename = "calc")]
    pub calcite: f64,
}

/// Trait for the source of the three datasets
#[async_trait::async_trait]
pub trait DataLoader: Send + Sync {
    /// Load the SST grid
    async fn load_grid(&self) -> Result<Vec<GridPoint>, DataLoadError>;

    /// Load the regional temperature series
    async fn load_temperature(&self) -> Result<Vec<TemperatureRecord>, DataLoadError>;

    /// Load the calcite series
    async fn load_calcite(&self) -> Result<Vec<CalciteRecord>, DataLoadError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}

/// All three datasets, fully materialized
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub grid: Vec<GridPoint>,
    pub temperature: Vec<TemperatureRecord>,
    pub calcite: Vec<CalciteRecord>,
}

impl Datasets {
    pub fn new(
        grid: Vec<GridPoint>,
        temperature: Vec<TemperatureRecord>,
        calcite: Vec<CalciteRecord>,
    ) -> Self {
        Self { grid, temperature, calcite }
    }

    /// Load every dataset concurrently. Fails with the first error if any
    /// single load fails; nothing is returned partially.
    pub async fn load_all(loader: &dyn DataLoader) -> Result<Self, DataLoadError> {
        let (grid, temperature, calcite) = tokio::try_join!(
            loader.load_grid(),
            loader.load_temperature(),
            loader.load_calcite(),
        )?;

        let datasets = Self::new(grid, temperature, calcite);
        datasets.warn_on_duplicates();

        info!(
            "Loaded {} grid points, {} temperature rows, {} calcite rows from {}",
            datasets.grid.len(),
            datasets.temperature.len(),
            datasets.calcite.len(),
            loader.source_name()
        );

        Ok(datasets)
    }

    /// Lookups use the first matching row; later duplicates are only reported.
    fn warn_on_duplicates(&self) {
        let mut seen = HashSet::new();
        let duplicates = self.temperature.iter()
            .filter(|r| !seen.insert((r.region.as_str(), r.year)))
            .count();
        if duplicates > 0 {
            warn!("{} duplicate (region, year) temperature rows; first match wins", duplicates);
        }

        let mut seen = HashSet::new();
        let duplicates = self.calcite.iter()
            .filter(|r| !seen.insert((r.region.as_str(), r.level, r.year)))
            .count();
        if duplicates > 0 {
            warn!("{} duplicate (region, level, year) calcite rows; first match wins", duplicates);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DatasetKind, LoadFailure};

    struct FixedLoader {
        fail: Option<DatasetKind>,
    }

    impl FixedLoader {
        fn check(&self, kind: DatasetKind) -> Result<(), DataLoadError> {
            match self.fail {
                Some(failing) if failing == kind => {
                    Err(DataLoadError::new(kind, LoadFailure::Io("not found".to_string())))
                }
                _ => Ok(()),
            }
        }
    }

    #[async_trait::async_trait]
    impl DataLoader for FixedLoader {
        async fn load_grid(&self) -> Result<Vec<GridPoint>, DataLoadError> {
            self.check(DatasetKind::SstMap)?;
            Ok(vec![GridPoint { longitude: 0.0, latitude: 0.0, value: 290.0 }])
        }

        async fn load_temperature(&self) -> Result<Vec<TemperatureRecord>, DataLoadError> {
            self.check(DatasetKind::Temperature)?;
            Ok(vec![TemperatureRecord { region: "Atlantic".to_string(), year: 1850, temperature_k: 18.0 }])
        }

        async fn load_calcite(&self) -> Result<Vec<CalciteRecord>, DataLoadError> {
            self.check(DatasetKind::Calcite)?;
            Ok(Vec::new())
        }

        fn source_name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_load_all_succeeds() {
        let datasets = Datasets::load_all(&FixedLoader { fail: None }).await.unwrap();
        assert_eq!(datasets.grid.len(), 1);
        assert_eq!(datasets.temperature.len(), 1);
        assert!(datasets.calcite.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_reports_failing_dataset() {
        for kind in DatasetKind::ALL {
            let err = Datasets::load_all(&FixedLoader { fail: Some(kind) }).await.unwrap_err();
            assert_eq!(err.dataset, kind);
        }
    }
}
