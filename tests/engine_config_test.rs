// ABOUTME: Integration tests for environment-driven engine configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serial_test::serial;
use stark_fitness::config::{env_keys, EngineConfig};
use stark_fitness::constants::domain_weights;
use stark_fitness::errors::ErrorCode;
use stark_fitness::models::{Gender, UserMetrics};
use stark_fitness::NormativeData;
use std::env;
use std::path::PathBuf;

use common::{init_test_logging, write_json_file, SMALL_TABLE_JSON};

fn clear_env() {
    env::remove_var(env_keys::NORMATIVE_DATA_PATH);
    env::remove_var(env_keys::WEIGHT_SUM_TOLERANCE);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    init_test_logging();
    clear_env();

    let config = EngineConfig::from_env().unwrap();

    assert_eq!(config, EngineConfig::default());
    assert!((config.weight_sum_tolerance - domain_weights::SUM_TOLERANCE).abs() < f64::EPSILON);
    assert_eq!(
        config.load_normative_data().unwrap(),
        NormativeData::builtin().unwrap()
    );
}

#[test]
#[serial]
fn test_table_path_from_environment() {
    init_test_logging();
    clear_env();
    let file = write_json_file(SMALL_TABLE_JSON);
    env::set_var(env_keys::NORMATIVE_DATA_PATH, file.path());
    env::set_var(env_keys::WEIGHT_SUM_TOLERANCE, "0.05");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.normative_data_path.as_deref(), Some(file.path()));
    assert!((config.weight_sum_tolerance - 0.05).abs() < f64::EPSILON);

    let engine = config.build_engine().unwrap();
    assert_eq!(engine.normative_data().metadata().version, "test-1");
    // The fixture has no female partition
    let result = engine.calculate_fitness_index(&UserMetrics::new(30.0, "female", 40.0));
    assert_eq!(result.vo2_percentile, None);
    assert!(engine
        .calculate_vo2max_percentile(45.0, 30.0, &Gender::male())
        .is_some());
}

#[test]
#[serial]
fn test_blank_path_means_builtin() {
    clear_env();
    env::set_var(env_keys::NORMATIVE_DATA_PATH, "   ");

    let config = EngineConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.normative_data_path, None);
}

#[test]
#[serial]
fn test_invalid_tolerance_is_a_config_error() {
    clear_env();
    env::set_var(env_keys::WEIGHT_SUM_TOLERANCE, "2.5");

    let error = EngineConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(env_keys::WEIGHT_SUM_TOLERANCE));
}

#[test]
#[serial]
fn test_missing_table_file_fails_to_build() {
    clear_env();
    let config = EngineConfig::default()
        .with_normative_data_path(Some(PathBuf::from("/nonexistent/stark/norms.json")));

    let error = config.build_engine().unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.code.exit_code(), 66);
}

#[test]
#[serial]
fn test_invalid_table_file_fails_to_build() {
    clear_env();
    let file = write_json_file(
        r#"{ "vo2maxNorms": { "male": [
            { "age": "20-29", "mean": 30.0 },
            { "age": "30-39", "mean": 35.0 }
        ] } }"#,
    );
    let config = EngineConfig::default().with_normative_data_path(Some(file.path().to_path_buf()));

    let error = config.build_engine().unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
