use plane_specs::{
    compute_report, BatteryCells, ConfigError, Mass, PlaneConfig, PlaneSource, PlaneType,
    SpecError,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{asset_path, assert_report_finite, load_asset, TRAINER_YAML};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_tempfile() {
    let file = write_config(TRAINER_YAML);
    let config = PlaneConfig::new(PlaneSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(config.name, "tempfile_trainer");
    assert_eq!(
        config.plane_type,
        PlaneType::Custom("tempfile_trainer".to_string())
    );
    assert_eq!(config.to_plane(), PlaneConfig::trainer().to_plane());
}

#[test]
fn test_trainer_asset_matches_preset() {
    let config = load_asset("trainer.yaml");
    assert_eq!(config.to_plane(), PlaneConfig::trainer().to_plane());
}

#[test]
fn test_park_flyer_asset() {
    let config = load_asset("park_flyer.yaml");
    assert_eq!(config.battery.cells, BatteryCells::Three);
    assert_eq!(config.motor.mass, Mass::kilograms(0.052));

    let report = compute_report(&config.to_plane()).unwrap();
    assert_report_finite(&report);
    assert!(report.passes_all_checks());
}

#[test]
fn test_glider_preset() {
    let report = compute_report(&PlaneConfig::glider().to_plane()).unwrap();
    assert_report_finite(&report);
    assert!(report.passes_all_checks());
}

#[test]
fn test_invalid_yaml() {
    let file = write_config("name: broken\nwing_span: [1, 2\n");
    let result = PlaneConfig::new(PlaneSource::File(file.path().to_path_buf()));
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_missing_field() {
    let yaml = TRAINER_YAML.replace("coefficient_of_drag: 0.3\n", "");
    let file = write_config(&yaml);
    let result = PlaneConfig::new(PlaneSource::File(file.path().to_path_buf()));
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_unsupported_cell_count() {
    let yaml = TRAINER_YAML.replace("cells: 4", "cells: 6");
    let error = PlaneConfig::from_yaml(&yaml).unwrap_err();
    assert!(error.to_string().contains("cell count 6"));
}

#[test]
fn test_config_error_converts_to_spec_error() {
    let missing = asset_path("does_not_exist.yaml");
    let error: SpecError = PlaneConfig::new(PlaneSource::File(missing))
        .unwrap_err()
        .into();
    assert!(matches!(error, SpecError::Config(ConfigError::FileError(_))));
}
