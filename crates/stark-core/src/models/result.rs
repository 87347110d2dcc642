// ABOUTME: Scoring output record and percentile performance tiers
// ABOUTME: Immutable value produced per request and persisted verbatim by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::Domain;
use crate::constants::tier_thresholds;

/// Everything the engine computes for one user
///
/// Fields that could not be resolved against the normative table are `None`
/// (serialized as `null`). Numbers are always finite: domain inputs that are
/// not finite are left out of every per-domain map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Weighted composite of the supplied domain scores, one decimal place
    pub fitness_index: f64,
    /// Age at which the population mean VO2max equals the user's
    pub fitness_age: Option<f64>,
    /// VO2max percentile within the user's age and gender bucket
    pub vo2_percentile: Option<u8>,
    /// Domain scores after normalization
    pub domain_scores: BTreeMap<Domain, f64>,
    /// Z-score of each domain against its population statistics
    pub z_scores: BTreeMap<Domain, f64>,
    /// Percentile of each domain against its population statistics
    pub domain_percentiles: BTreeMap<Domain, u8>,
    /// Tier of the VO2max percentile
    pub vo2_tier: Option<PerformanceTier>,
}

/// Coarse banding of a percentile for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// Below the 25th percentile
    NeedsWork,
    /// 25th to 39th percentile
    Fair,
    /// 40th to 69th percentile
    Average,
    /// 70th to 84th percentile
    Good,
    /// 85th percentile and above
    Excellent,
}

impl PerformanceTier {
    /// Band a 0-100 percentile
    #[must_use]
    pub const fn from_percentile(percentile: u8) -> Self {
        if percentile >= tier_thresholds::EXCELLENT {
            Self::Excellent
        } else if percentile >= tier_thresholds::GOOD {
            Self::Good
        } else if percentile >= tier_thresholds::AVERAGE {
            Self::Average
        } else if percentile >= tier_thresholds::FAIR {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
