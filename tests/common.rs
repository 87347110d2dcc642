// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample users, and temporary normative table files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `stark_fitness`

use stark_fitness::models::{Domain, UserMetrics};
use stark_fitness::{NormativeData, ScoringEngine};
use std::env;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine over the built-in table
pub fn builtin_engine() -> ScoringEngine {
    init_test_logging();
    ScoringEngine::new(NormativeData::builtin().expect("built-in table must load"))
}

/// The six-domain reference user: 28 year old male, VO2max 52
pub fn reference_user() -> UserMetrics {
    UserMetrics::new(28.0, "male", 52.0).with_domains([
        (Domain::Strength, 85.0),
        (Domain::Endurance, 72.0),
        (Domain::Power, 80.0),
        (Domain::Mobility, 58.0),
        (Domain::BodyComp, 75.0),
        (Domain::Recovery, 68.0),
    ])
}

/// Minimal valid table with one male partition
pub const SMALL_TABLE_JSON: &str = r#"{
    "version": "test-1",
    "source": "integration fixture",
    "domainWeights": { "Strength": 0.5, "Endurance": 0.5 },
    "vo2maxNorms": {
        "male": [
            { "age": "20-39", "mean": 45.0, "std_dev": 5.0 },
            { "age": "40-59", "mean": 35.0, "std_dev": 5.0 }
        ]
    }
}"#;

/// Write `json` (a table or user input) to a temporary file that lives as long as the handle
pub fn write_json_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write json");
    file.flush().expect("flush json");
    file
}
