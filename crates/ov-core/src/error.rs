//! Error types shared across the explorer crates

use std::fmt;
use thiserror::Error;

/// The three input datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// `sst_mean_map.csv`
    SstMap,
    /// `ocean_timeseries.csv`
    Temperature,
    /// `calc_by_region.csv`
    Calcite,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::SstMap, DatasetKind::Temperature, DatasetKind::Calcite];

    /// Default file name of the dataset
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::SstMap => "sst_mean_map.csv",
            DatasetKind::Temperature => "ocean_timeseries.csv",
            DatasetKind::Calcite => "calc_by_region.csv",
        }
    }
}

impl DatasetKind {
    /// Header columns the file must carry
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::SstMap => &["lon", "lat", "value"],
            DatasetKind::Temperature => &["region", "year", "temperature_K"],
            DatasetKind::Calcite => &["region", "lev", "time", "calc"],
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Why a dataset failed to load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadFailure {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("loader task failed: {0}")]
    Join(String),
}

/// A dataset could not be fetched or parsed. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load {dataset}: {failure}")]
pub struct DataLoadError {
    pub dataset: DatasetKind,
    pub failure: LoadFailure,
}

impl DataLoadError {
    pub fn new(dataset: DatasetKind, failure: LoadFailure) -> Self {
        Self { dataset, failure }
    }
}

/// Rejected selection changes. The selection is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("level {level} is not one of the model levels")]
    InvalidLevel { level: u32 },

    #[error("no region selected")]
    NoRegionSelected,

    #[error("unknown region '{name}'")]
    UnknownRegion { name: String },

    #[error("datasets are not loaded")]
    DatasetsNotLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_dataset() {
        let err = DataLoadError::new(
            DatasetKind::Calcite,
            LoadFailure::Parse { row: 4, message: "invalid float literal".to_string() },
        );
        assert_eq!(
            err.to_string(),
            "failed to load calc_by_region.csv: row 4: invalid float literal"
        );
    }

    #[test]
    fn test_selection_error_messages() {
        assert_eq!(
            SelectionError::InvalidLevel { level: 999 }.to_string(),
            "level 999 is not one of the model levels"
        );
        assert_eq!(SelectionError::NoRegionSelected.to_string(), "no region selected");
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DataLoadError>();
        assert_impl::<SelectionError>();
    }
}
