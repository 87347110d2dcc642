// ABOUTME: JSON asset loader for normative tables
// ABOUTME: Parses the data-asset format, fills defaults, and hands parts to the validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Normative table loader.
//!
//! The asset format mirrors the dataset shipped with the dashboard:
//!
//! ```json
//! {
//!   "version": "1.1.0",
//!   "domainWeights": { "Strength": 0.2, "Body Comp": 0.15 },
//!   "domainStats": { "Strength": { "mean": 50, "std": 15 } },
//!   "vo2maxNorms": { "male": [{ "age": "20-29", "mean": 44.0, "std_dev": 8.5 }] }
//! }
//! ```
//!
//! Domain labels are matched leniently. A weighted domain without
//! `domainStats` gets the built-in defaults, and a group whose standard
//! deviation is missing (under either `std_dev` or `std`) gets `1.0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stark_core::constants::{domain_weights, normative_metadata};
use stark_core::models::{Domain, Gender};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{
    AgeRange, DomainStats, NormativeData, NormativeDataError, NormativeMetadata, Vo2maxNormGroup,
};

/// Bundled ACSM-derived table
const BUILTIN_NORMATIVE_DATA: &str = include_str!("../../data/normative_data.json");

/// Knobs applied while loading a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Allowed distance of the weight sum from 1.0 before a warning is logged
    pub weight_sum_tolerance: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            weight_sum_tolerance: domain_weights::SUM_TOLERANCE,
        }
    }
}

/// On-disk representation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNormativeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default)]
    domain_weights: BTreeMap<String, f64>,
    #[serde(default)]
    domain_stats: BTreeMap<String, DomainStats>,
    #[serde(default)]
    vo2max_norms: BTreeMap<String, Vec<RawNormGroup>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNormGroup {
    age: String,
    mean: f64,
    #[serde(
        default,
        alias = "std",
        alias = "stdDev",
        skip_serializing_if = "Option::is_none"
    )]
    std_dev: Option<f64>,
}

impl TryFrom<RawNormativeData> for NormativeData {
    type Error = NormativeDataError;

    fn try_from(raw: RawNormativeData) -> Result<Self, Self::Error> {
        let defaults = NormativeMetadata::default();
        let metadata = NormativeMetadata {
            version: raw.version.unwrap_or(defaults.version),
            description: raw.description.unwrap_or(defaults.description),
            last_updated: raw.last_updated.unwrap_or(defaults.last_updated),
            source: raw.source.unwrap_or(defaults.source),
        };

        let mut domain_weights = BTreeMap::new();
        for (label, weight) in raw.domain_weights {
            domain_weights.insert(label.parse::<Domain>()?, weight);
        }

        let mut domain_stats = BTreeMap::new();
        for (label, stats) in raw.domain_stats {
            domain_stats.insert(label.parse::<Domain>()?, stats);
        }
        for domain in domain_weights.keys() {
            domain_stats.entry(*domain).or_insert_with(|| {
                debug!(domain = %domain, "Using default statistics for weighted domain");
                DomainStats::default_for(*domain)
            });
        }

        let mut vo2max_norms = BTreeMap::new();
        for (key, groups) in raw.vo2max_norms {
            let gender = Gender::new(&key);
            let groups = groups
                .into_iter()
                .map(|group| convert_group(&gender, group))
                .collect::<Result<Vec<_>, _>>()?;
            vo2max_norms.insert(gender, groups);
        }

        Self::new(metadata, domain_stats, domain_weights, vo2max_norms)
    }
}

fn convert_group(gender: &Gender, raw: RawNormGroup) -> Result<Vo2maxNormGroup, NormativeDataError> {
    let age_range: AgeRange =
        raw.age
            .parse()
            .map_err(|()| NormativeDataError::InvalidAgeRange {
                gender: gender.to_string(),
                label: raw.age.clone(),
            })?;

    Ok(Vo2maxNormGroup {
        age_range,
        mean: raw.mean,
        std_dev: raw
            .std_dev
            .unwrap_or(normative_metadata::DEFAULT_GROUP_STD_DEV),
    })
}

impl From<&NormativeData> for RawNormativeData {
    fn from(data: &NormativeData) -> Self {
        let metadata = data.metadata().clone();
        Self {
            version: Some(metadata.version),
            description: Some(metadata.description),
            last_updated: Some(metadata.last_updated),
            source: Some(metadata.source),
            domain_weights: data
                .domain_weights()
                .iter()
                .map(|(domain, weight)| (domain.to_string(), *weight))
                .collect(),
            domain_stats: data
                .domain_stats()
                .iter()
                .map(|(domain, stats)| (domain.to_string(), *stats))
                .collect(),
            vo2max_norms: data
                .vo2max_norms
                .iter()
                .map(|(gender, groups)| {
                    let groups = groups
                        .iter()
                        .map(|group| RawNormGroup {
                            age: group.age_range.to_string(),
                            mean: group.mean,
                            std_dev: Some(group.std_dev),
                        })
                        .collect();
                    (gender.to_string(), groups)
                })
                .collect(),
        }
    }
}

impl NormativeData {
    /// The bundled ACSM-derived table
    ///
    /// # Errors
    ///
    /// Only fails if the bundled asset itself is malformed.
    pub fn builtin() -> Result<Self, NormativeDataError> {
        Self::builtin_with(LoadOptions::default())
    }

    /// The bundled table, loaded with explicit options
    ///
    /// # Errors
    ///
    /// See [`NormativeData::builtin`].
    pub fn builtin_with(options: LoadOptions) -> Result<Self, NormativeDataError> {
        Self::from_json_str_with(BUILTIN_NORMATIVE_DATA, options)
    }

    /// Parse and validate a table from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`NormativeDataError::Parse`] for malformed JSON and a
    /// validation variant when the table breaks an invariant.
    pub fn from_json_str(json: &str) -> Result<Self, NormativeDataError> {
        Self::from_json_str_with(json, LoadOptions::default())
    }

    /// Parse and validate a table from JSON text with explicit options
    ///
    /// # Errors
    ///
    /// See [`NormativeData::from_json_str`].
    pub fn from_json_str_with(json: &str, options: LoadOptions) -> Result<Self, NormativeDataError> {
        let raw: RawNormativeData = serde_json::from_str(json)?;
        let data = Self::try_from(raw)?;
        data.log_summary(options);
        Ok(data)
    }

    /// Read, parse and validate a table file
    ///
    /// # Errors
    ///
    /// Returns [`NormativeDataError::Io`] when the file cannot be read, plus
    /// everything [`NormativeData::from_json_str`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NormativeDataError> {
        Self::from_path_with(path, LoadOptions::default())
    }

    /// Read, parse and validate a table file with explicit options
    ///
    /// # Errors
    ///
    /// See [`NormativeData::from_path`].
    pub fn from_path_with(
        path: impl AsRef<Path>,
        options: LoadOptions,
    ) -> Result<Self, NormativeDataError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| NormativeDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loading normative data");
        Self::from_json_str_with(&json, options)
    }

    /// Render the table in the asset format
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        serde_json::to_value(RawNormativeData::from(self)).unwrap_or(Value::Null)
    }

    /// Whether the weight sum lies within `tolerance` of 1.0
    #[must_use]
    pub fn weights_balanced(&self, tolerance: f64) -> bool {
        self.domain_weights().is_empty() || (self.weight_sum() - 1.0).abs() <= tolerance
    }

    fn log_summary(&self, options: LoadOptions) {
        info!(
            version = %self.metadata().version,
            source = %self.metadata().source,
            domains = self.domain_weights().len(),
            partitions = self.vo2max_norms.len(),
            "Normative data loaded"
        );

        if !self.weights_balanced(options.weight_sum_tolerance) {
            warn!(
                weight_sum = self.weight_sum(),
                tolerance = options.weight_sum_tolerance,
                "Domain weights do not sum to 1.0; the Fitness Index renormalizes over supplied domains"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_table_loads() {
        let data = NormativeData::builtin().unwrap();
        assert_eq!(data.domain_weights().len(), 6);
        assert!(data.weights_balanced(1e-9));
        assert_eq!(data.genders().count(), 2);
        assert_eq!(data.metadata().source, "ACSM Guidelines, 11th Ed.");
    }

    #[test]
    fn test_lenient_keys_and_defaults() {
        let json = r#"{
            "domainWeights": { "Body Comp": 0.5, "strength": 0.5 },
            "vo2maxNorms": {
                "Male": [
                    { "age": "30-39", "mean": 42.0, "std": 8.0 },
                    { "age": "20-29", "mean": 44.0 }
                ]
            }
        }"#;
        let data = NormativeData::from_json_str(json).unwrap();

        assert_eq!(data.metadata(), &NormativeMetadata::default());
        assert_eq!(
            data.stats_for(Domain::BodyComp),
            Some(&DomainStats::default_for(Domain::BodyComp))
        );

        let groups = data.norms_for(&Gender::male()).unwrap();
        assert_eq!(groups[0].age_range.to_string(), "20-29");
        assert!((groups[0].std_dev - 1.0).abs() < f64::EPSILON);
        assert!((groups[1].std_dev - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let json = r#"{ "domainWeights": { "Agility": 1.0 } }"#;
        assert!(matches!(
            NormativeData::from_json_str(json),
            Err(NormativeDataError::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_bad_age_label_rejected() {
        let json = r#"{ "vo2maxNorms": { "male": [{ "age": "20 to 29", "mean": 44.0 }] } }"#;
        assert!(matches!(
            NormativeData::from_json_str(json),
            Err(NormativeDataError::InvalidAgeRange { .. })
        ));
    }

    #[test]
    fn test_from_path_and_missing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_NORMATIVE_DATA.as_bytes()).unwrap();
        let data = NormativeData::from_path(file.path()).unwrap();
        assert_eq!(data, NormativeData::builtin().unwrap());

        let missing = NormativeData::from_path("/nonexistent/normative_data.json");
        assert!(matches!(missing, Err(NormativeDataError::Io { .. })));
    }

    #[test]
    fn test_json_value_reloads_identically() {
        let data = NormativeData::builtin().unwrap();
        let rendered = data.to_json_value().to_string();
        assert_eq!(NormativeData::from_json_str(&rendered).unwrap(), data);
    }
}
