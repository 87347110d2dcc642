// ABOUTME: Normative reference data consumed by the scoring engine
// ABOUTME: Domain statistics, Fitness Index weights, and age/gender VO2max norm groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Normative Data
//!
//! [`NormativeData`] is built once, validated, and then only read. It can
//! only be obtained through a validating constructor, so every instance in
//! circulation upholds the invariants the algorithms rely on:
//!
//! - each partition's groups are sorted by minimum age and do not overlap
//! - mean `VO2max` never increases from one age group to the next
//! - standard deviations are finite and non-negative, weights lie in `[0, 1]`
//!
//! Tables are usually loaded from the JSON asset format (see [`loader`]);
//! [`NormativeData::builtin`] returns the bundled ACSM-derived table.

mod error;
pub mod loader;
mod validation;

pub use error::NormativeDataError;
pub use loader::LoadOptions;

use serde::{Deserialize, Serialize};
use stark_core::constants::{domain_defaults, normative_metadata};
use stark_core::models::{Domain, Gender};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Population mean and standard deviation for one domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainStats {
    /// Population mean on the 0-100 scale
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
}

impl DomainStats {
    /// Statistics assumed for a domain when a table does not list them
    #[must_use]
    pub const fn default_for(domain: Domain) -> Self {
        let (mean, std) = match domain {
            Domain::Strength => (domain_defaults::STRENGTH_MEAN, domain_defaults::STRENGTH_STD),
            Domain::Endurance => (
                domain_defaults::ENDURANCE_MEAN,
                domain_defaults::ENDURANCE_STD,
            ),
            Domain::Power => (domain_defaults::POWER_MEAN, domain_defaults::POWER_STD),
            Domain::Mobility => (domain_defaults::MOBILITY_MEAN, domain_defaults::MOBILITY_STD),
            Domain::BodyComp => (
                domain_defaults::BODY_COMP_MEAN,
                domain_defaults::BODY_COMP_STD,
            ),
            Domain::Recovery => (domain_defaults::RECOVERY_MEAN, domain_defaults::RECOVERY_STD),
        };
        Self { mean, std }
    }
}

/// Inclusive age bracket, written `"min-max"` in data assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeRange {
    /// Youngest age in the bracket
    pub min: u16,
    /// Oldest age in the bracket
    pub max: u16,
}

impl AgeRange {
    /// Whether `age` falls inside the bracket (both ends inclusive)
    #[must_use]
    pub fn contains(&self, age: f64) -> bool {
        age >= f64::from(self.min) && age <= f64::from(self.max)
    }

    /// Representative age of the bracket
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

impl FromStr for AgeRange {
    type Err = ();

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let (min, max) = label.split_once('-').ok_or(())?;
        let min: u16 = min.trim().parse().map_err(|_| ())?;
        let max: u16 = max.trim().parse().map_err(|_| ())?;
        if min > max {
            return Err(());
        }
        Ok(Self { min, max })
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Population `VO2max` statistics for one age bracket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vo2maxNormGroup {
    /// Age bracket
    pub age_range: AgeRange,
    /// Mean `VO2max` (mL/kg/min)
    pub mean: f64,
    /// Standard deviation of `VO2max`
    pub std_dev: f64,
}

/// Provenance of a normative table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormativeMetadata {
    /// Dataset version
    pub version: String,
    /// Free-form description
    pub description: String,
    /// Revision date label
    pub last_updated: String,
    /// Publication the numbers come from
    pub source: String,
}

impl Default for NormativeMetadata {
    fn default() -> Self {
        Self {
            version: normative_metadata::VERSION.to_owned(),
            description: normative_metadata::DESCRIPTION.to_owned(),
            last_updated: normative_metadata::LAST_UPDATED.to_owned(),
            source: normative_metadata::SOURCE.to_owned(),
        }
    }
}

/// Validated, read-only reference table
#[derive(Debug, Clone, PartialEq)]
pub struct NormativeData {
    metadata: NormativeMetadata,
    domain_stats: BTreeMap<Domain, DomainStats>,
    domain_weights: BTreeMap<Domain, f64>,
    vo2max_norms: BTreeMap<Gender, Vec<Vo2maxNormGroup>>,
}

impl NormativeData {
    /// Build a table from its parts
    ///
    /// Groups are sorted by minimum age before validation, so callers may
    /// supply them in any order.
    ///
    /// # Errors
    ///
    /// Returns a [`NormativeDataError`] when any table invariant is violated
    /// (see the module documentation).
    pub fn new(
        metadata: NormativeMetadata,
        domain_stats: BTreeMap<Domain, DomainStats>,
        domain_weights: BTreeMap<Domain, f64>,
        mut vo2max_norms: BTreeMap<Gender, Vec<Vo2maxNormGroup>>,
    ) -> Result<Self, NormativeDataError> {
        for groups in vo2max_norms.values_mut() {
            groups.sort_by_key(|group| (group.age_range.min, group.age_range.max));
        }

        validation::validate_domain_stats(&domain_stats)?;
        validation::validate_weights(&domain_weights)?;
        for (gender, groups) in &vo2max_norms {
            validation::validate_partition(gender, groups)?;
        }

        Ok(Self {
            metadata,
            domain_stats,
            domain_weights,
            vo2max_norms,
        })
    }

    /// Provenance of this table
    #[must_use]
    pub const fn metadata(&self) -> &NormativeMetadata {
        &self.metadata
    }

    /// Population statistics per domain
    #[must_use]
    pub const fn domain_stats(&self) -> &BTreeMap<Domain, DomainStats> {
        &self.domain_stats
    }

    /// Statistics for one domain
    #[must_use]
    pub fn stats_for(&self, domain: Domain) -> Option<&DomainStats> {
        self.domain_stats.get(&domain)
    }

    /// Fitness Index weights
    #[must_use]
    pub const fn domain_weights(&self) -> &BTreeMap<Domain, f64> {
        &self.domain_weights
    }

    /// Sum of all configured weights
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.domain_weights.values().sum()
    }

    /// Age-ordered `VO2max` groups for a partition
    #[must_use]
    pub fn norms_for(&self, gender: &Gender) -> Option<&[Vo2maxNormGroup]> {
        self.vo2max_norms.get(gender).map(Vec::as_slice)
    }

    /// Partition keys this table covers
    pub fn genders(&self) -> impl Iterator<Item = &Gender> {
        self.vo2max_norms.keys()
    }

    /// Find the bracket containing `age` within a partition
    ///
    /// Linear scan in age order; `None` when the partition is unknown or no
    /// bracket contains the age.
    #[must_use]
    pub fn find_norm_group(&self, age: f64, gender: &Gender) -> Option<&Vo2maxNormGroup> {
        self.norms_for(gender)?
            .iter()
            .find(|group| group.age_range.contains(age))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn group(min: u16, max: u16, mean: f64) -> Vo2maxNormGroup {
        Vo2maxNormGroup {
            age_range: AgeRange { min, max },
            mean,
            std_dev: 5.0,
        }
    }

    #[test]
    fn test_age_range_parsing() {
        let range: AgeRange = "20-29".parse().unwrap();
        assert_eq!(range, AgeRange { min: 20, max: 29 });
        assert!((range.midpoint() - 24.5).abs() < f64::EPSILON);
        assert_eq!(range.to_string(), "20-29");

        assert!("29-20".parse::<AgeRange>().is_err());
        assert!("twenty-29".parse::<AgeRange>().is_err());
        assert!("20".parse::<AgeRange>().is_err());
    }

    #[test]
    fn test_groups_sorted_on_construction() {
        let mut norms = BTreeMap::new();
        norms.insert(
            Gender::male(),
            vec![group(40, 49, 40.0), group(20, 29, 44.0), group(30, 39, 42.0)],
        );
        let data = NormativeData::new(
            NormativeMetadata::default(),
            BTreeMap::new(),
            BTreeMap::new(),
            norms,
        )
        .unwrap();

        let mins: Vec<u16> = data
            .norms_for(&Gender::male())
            .unwrap()
            .iter()
            .map(|g| g.age_range.min)
            .collect();
        assert_eq!(mins, vec![20, 30, 40]);
    }

    #[test]
    fn test_find_norm_group_boundaries() {
        let mut norms = BTreeMap::new();
        norms.insert(Gender::female(), vec![group(20, 29, 38.0), group(30, 39, 36.0)]);
        let data = NormativeData::new(
            NormativeMetadata::default(),
            BTreeMap::new(),
            BTreeMap::new(),
            norms,
        )
        .unwrap();

        let female = Gender::female();
        assert_eq!(data.find_norm_group(20.0, &female).unwrap().age_range.min, 20);
        assert_eq!(data.find_norm_group(29.0, &female).unwrap().age_range.min, 20);
        assert_eq!(data.find_norm_group(30.0, &female).unwrap().age_range.min, 30);
        assert!(data.find_norm_group(29.5, &female).is_none());
        assert!(data.find_norm_group(45.0, &female).is_none());
        assert!(data.find_norm_group(25.0, &Gender::male()).is_none());
    }
}
