//! Data loading for the ocean explorer

pub mod config;
pub mod sources;

use ov_core::{DataLoadError, DatasetKind, LoadFailure};
use tokio::task::JoinError;
use thiserror::Error;

// Re-exports
pub use config::DataConfig;
pub use sources::CsvDataLoader;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("header: {0}")]
    Header(String),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl DataError {
    /// Tag the error with the dataset it came from
    pub fn into_load_error(self, dataset: DatasetKind) -> DataLoadError {
        let failure = match self {
            DataError::Io(e) => LoadFailure::Io(e.to_string()),
            DataError::Row { row, message } => LoadFailure::Parse { row, message },
            DataError::Csv(message) => LoadFailure::Parse { row: 0, message },
            DataError::Header(message) => LoadFailure::Parse { row: 0, message },
            DataError::Config(message) => LoadFailure::Io(message),
            DataError::Join(e) => LoadFailure::Join(e.to_string()),
        };
        DataLoadError::new(dataset, failure)
    }
}
