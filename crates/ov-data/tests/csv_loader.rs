//! Loading the three CSV files from a temporary data directory.

use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;
use ov_core::{DatasetKind, Datasets, LoadFailure, TemperatureRecord};
use ov_data::{CsvDataLoader, DataConfig};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn write_all(dir: &Path) {
    write(dir, "sst_mean_map.csv", "lon,lat,value\n-30.5,10.0,295.1\n150.0,0.0,301.2\n");
    write(
        dir,
        "ocean_timeseries.csv",
        "region,year,temperature_K\nAtlantic,1850,18.00\nAtlantic,2014,18.64\nPacific,1850,20.10\n",
    );
    write(
        dir,
        "calc_by_region.csv",
        "region,lev,time,calc\nAtlantic,500,1850,1.2e-3\nAtlantic, 1500 ,1850,4.0e-4\n",
    );
}

#[tokio::test]
async fn test_loads_all_datasets() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let datasets = Datasets::load_all(&loader).await.unwrap();

    assert_eq!(datasets.grid.len(), 2);
    assert_abs_diff_eq!(datasets.grid[0].longitude, -30.5);
    assert_eq!(
        datasets.temperature[1],
        TemperatureRecord { region: "Atlantic".to_string(), year: 2014, temperature_k: 18.64 }
    );
    assert_eq!(datasets.calcite[1].level, 1500);
    assert_abs_diff_eq!(datasets.calcite[0].calcite, 1.2e-3);
}

#[tokio::test]
async fn test_missing_file_names_dataset() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    fs::remove_file(dir.path().join("calc_by_region.csv")).unwrap();

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let err = Datasets::load_all(&loader).await.unwrap_err();

    assert_eq!(err.dataset, DatasetKind::Calcite);
    assert!(matches!(err.failure, LoadFailure::Io(_)));
}

#[tokio::test]
async fn test_non_numeric_field_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    write(
        dir.path(),
        "ocean_timeseries.csv",
        "region,year,temperature_K\nAtlantic,1850,18.00\nAtlantic,1851,warm\n",
    );

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let err = Datasets::load_all(&loader).await.unwrap_err();

    assert_eq!(err.dataset, DatasetKind::Temperature);
    assert!(matches!(err.failure, LoadFailure::Parse { row: 2, .. }));
}

#[tokio::test]
async fn test_missing_column_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    write(dir.path(), "sst_mean_map.csv", "lon,lat\n1.0,2.0\n");

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let err = Datasets::load_all(&loader).await.unwrap_err();

    assert_eq!(err.dataset, DatasetKind::SstMap);
    assert!(matches!(err.failure, LoadFailure::Parse { row: 0, .. }));
}

#[tokio::test]
async fn test_zero_byte_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    write(dir.path(), "sst_mean_map.csv", "");

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let err = Datasets::load_all(&loader).await.unwrap_err();

    assert_eq!(err.dataset, DatasetKind::SstMap);
    assert!(matches!(err.failure, LoadFailure::Parse { row: 0, .. }));
}

#[tokio::test]
async fn test_headerless_single_row_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    write(dir.path(), "ocean_timeseries.csv", "Atlantic,1850,18.00\n");

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let err = Datasets::load_all(&loader).await.unwrap_err();

    assert_eq!(err.dataset, DatasetKind::Temperature);
    match err.failure {
        LoadFailure::Parse { row, message } => {
            assert_eq!(row, 0);
            assert!(message.contains("temperature_K"), "{}", message);
        }
        other => panic!("unexpected failure {:?}", other),
    }
}

#[tokio::test]
async fn test_header_only_file_is_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_all(dir.path());
    write(dir.path(), "calc_by_region.csv", "region,lev,time,calc\n");

    let loader = CsvDataLoader::new(DataConfig::with_data_dir(dir.path()));
    let datasets = Datasets::load_all(&loader).await.unwrap();
    assert!(datasets.calcite.is_empty());
}
