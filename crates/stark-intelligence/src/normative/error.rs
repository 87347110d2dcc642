// ABOUTME: Error types for normative table loading and validation
// ABOUTME: Defines variants for malformed ranges, unordered norms, and bad statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Normative data error types.

use serde_json::json;
use stark_core::errors::AppError;
use stark_core::models::{Domain, UnknownDomainError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a normative table is rejected
#[derive(Debug, Error)]
pub enum NormativeDataError {
    /// The table file could not be read
    #[error("Failed to read normative data from {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON for a normative table
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A weight or stats key does not name a fitness domain
    #[error("Unknown domain: {0}")]
    UnknownDomain(#[from] UnknownDomainError),

    /// An age label is not of the form `min-max` with `min <= max`
    #[error("Invalid age range '{label}' for '{gender}'")]
    InvalidAgeRange {
        /// Partition the label belongs to
        gender: String,
        /// Offending label
        label: String,
    },

    /// A partition declares no age groups
    #[error("No VO2max age groups configured for '{gender}'")]
    EmptyPartition {
        /// Partition key
        gender: String,
    },

    /// Two age groups of one partition share ages
    #[error("Age ranges {first} and {second} overlap for '{gender}'")]
    OverlappingAgeRanges {
        /// Partition key
        gender: String,
        /// Younger range label
        first: String,
        /// Older range label
        second: String,
    },

    /// Mean VO2max rises with age, which breaks fitness-age interpolation
    #[error(
        "Mean VO2max must not increase with age for '{gender}': {younger} has {younger_mean}, {older} has {older_mean}"
    )]
    NonMonotonicNorms {
        /// Partition key
        gender: String,
        /// Younger range label
        younger: String,
        /// Mean of the younger range
        younger_mean: f64,
        /// Older range label
        older: String,
        /// Mean of the older range
        older_mean: f64,
    },

    /// A standard deviation is negative or not finite
    #[error("Invalid standard deviation {value} for {context}")]
    InvalidStdDev {
        /// What the deviation describes
        context: String,
        /// Offending value
        value: f64,
    },

    /// A domain weight is outside `[0, 1]`
    #[error("Invalid weight {weight} for {domain}: must be within [0, 1]")]
    InvalidWeight {
        /// Weighted domain
        domain: Domain,
        /// Offending weight
        weight: f64,
    },

    /// A mean is NaN or infinite
    #[error("Non-finite mean for {context}")]
    NonFiniteMean {
        /// What the mean describes
        context: String,
    },
}

impl From<NormativeDataError> for AppError {
    fn from(error: NormativeDataError) -> Self {
        match error {
            NormativeDataError::Io { path, source } => {
                let location = path.display().to_string();
                let mut converted = Self::from(source);
                converted.message = format!("{location}: {}", converted.message);
                converted.with_details(json!({ "path": location }))
            }
            NormativeDataError::Parse(source) => Self::from(source),
            other => Self::config_invalid(other.to_string()).with_source(other),
        }
    }
}
