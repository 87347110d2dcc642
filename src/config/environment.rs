// ABOUTME: Environment-based engine configuration
// ABOUTME: Picks the normative table source and the weight-sum tolerance, then builds a ScoringEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use stark_core::constants::domain_weights;
use stark_core::errors::{AppError, AppResult};
use stark_intelligence::{LoadOptions, NormativeData, ScoringEngine};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable names
pub mod env_keys {
    /// Path to a JSON normative table; the built-in table is used when unset
    pub const NORMATIVE_DATA_PATH: &str = "STARK_NORMATIVE_DATA_PATH";
    /// Allowed distance of the domain weight sum from 1.0 before warning
    pub const WEIGHT_SUM_TOLERANCE: &str = "STARK_WEIGHT_SUM_TOLERANCE";
}

/// Where the normative table comes from and how it is checked
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// JSON table to load instead of the built-in one
    pub normative_data_path: Option<PathBuf>,
    /// Weight-sum tolerance handed to the loader
    pub weight_sum_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normative_data_path: None,
            weight_sum_tolerance: domain_weights::SUM_TOLERANCE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when `STARK_WEIGHT_SUM_TOLERANCE` is
    /// not a number in `[0, 1]`
    pub fn from_env() -> AppResult<Self> {
        let normative_data_path = env::var(env_keys::NORMATIVE_DATA_PATH)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let weight_sum_tolerance = match env::var(env_keys::WEIGHT_SUM_TOLERANCE) {
            Ok(value) => parse_tolerance(&value)?,
            Err(_) => domain_weights::SUM_TOLERANCE,
        };

        let config = Self {
            normative_data_path,
            weight_sum_tolerance,
        };
        debug!(?config, "Engine configuration loaded from environment");
        Ok(config)
    }

    /// Override the table path (CLI `--norms`)
    #[must_use]
    pub fn with_normative_data_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.normative_data_path = path;
        }
        self
    }

    /// Loader options derived from this configuration
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            weight_sum_tolerance: self.weight_sum_tolerance,
        }
    }

    /// Load and validate the configured normative table
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not valid JSON, or
    /// fails table validation
    pub fn load_normative_data(&self) -> AppResult<NormativeData> {
        let options = self.load_options();
        let data = match self.normative_data_path.as_deref() {
            Some(path) => NormativeData::from_path_with(path, options)?,
            None => {
                info!("Using built-in normative data");
                NormativeData::builtin_with(options)?
            }
        };
        Ok(data)
    }

    /// Build a scoring engine over the configured table
    ///
    /// # Errors
    ///
    /// See [`EngineConfig::load_normative_data`]
    pub fn build_engine(&self) -> AppResult<ScoringEngine> {
        Ok(ScoringEngine::new(self.load_normative_data()?))
    }
}

fn parse_tolerance(value: &str) -> AppResult<f64> {
    let invalid = || {
        AppError::config_invalid(format!(
            "{} must be a number between 0 and 1, got '{value}'",
            env_keys::WEIGHT_SUM_TOLERANCE
        ))
        .with_details(json!({
            "variable": env_keys::WEIGHT_SUM_TOLERANCE,
            "value": value,
        }))
    };

    let tolerance: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !(0.0..=1.0).contains(&tolerance) {
        return Err(invalid());
    }
    Ok(tolerance)
}
