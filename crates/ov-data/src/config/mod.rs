//! Data location configuration

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use ov_core::DatasetKind;

use crate::DataError;

/// Where the three CSV files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the CSV files
    pub data_dir: PathBuf,

    /// SST grid file name
    pub grid_file: String,

    /// Regional temperature file name
    pub temperature_file: String,

    /// Calcite file name
    pub calcite_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            grid_file: DatasetKind::SstMap.file_name().to_string(),
            temperature_file: DatasetKind::Temperature.file_name().to_string(),
            calcite_file: DatasetKind::Calcite.file_name().to_string(),
        }
    }
}

impl DataConfig {
    /// Default file names inside `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| DataError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve a command-line argument: a `.json` file is read as a
    /// configuration, anything else names the data directory
    pub fn from_arg(arg: Option<&str>) -> Result<Self, DataError> {
        match arg {
            None => Ok(Self::default()),
            Some(arg) if arg.ends_with(".json") => Self::from_json_file(Path::new(arg)),
            Some(arg) => Ok(Self::with_data_dir(arg)),
        }
    }

    /// Full path of a dataset file
    pub fn path_for(&self, dataset: DatasetKind) -> PathBuf {
        let file = match dataset {
            DatasetKind::SstMap => &self.grid_file,
            DatasetKind::Temperature => &self.temperature_file,
            DatasetKind::Calcite => &self.calcite_file,
        };
        self.data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DataConfig::default();
        assert_eq!(config.path_for(DatasetKind::SstMap), PathBuf::from("data/sst_mean_map.csv"));
        assert_eq!(config.path_for(DatasetKind::Calcite), PathBuf::from("data/calc_by_region.csv"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DataConfig = serde_json::from_str(r#"{ "data_dir": "/srv/ocean" }"#).unwrap();
        assert_eq!(
            config.path_for(DatasetKind::Temperature),
            PathBuf::from("/srv/ocean/ocean_timeseries.csv")
        );
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(DataConfig::from_arg(None).unwrap(), DataConfig::default());
        assert_eq!(DataConfig::from_arg(Some("samples")).unwrap().data_dir, PathBuf::from("samples"));
        assert!(matches!(
            DataConfig::from_arg(Some("does/not/exist.json")),
            Err(DataError::Io(_))
        ));
    }
}
