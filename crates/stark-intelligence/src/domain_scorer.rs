// ABOUTME: Per-domain normalization against population statistics
// ABOUTME: Maps raw domain scores to z-scores and percentiles with one shared formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use stark_core::models::Domain;
use std::collections::BTreeMap;

use crate::normative::{DomainStats, NormativeData};
use crate::statistics::{percentile_from_z, z_score};

/// Standing of one raw score within its domain's population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    /// Standard deviations from the population mean
    pub z_score: f64,
    /// Percentile (0-100)
    pub percentile: u8,
}

/// Score one raw value against its domain statistics
#[must_use]
pub fn score(raw_value: f64, stats: &DomainStats) -> DomainScore {
    let z = z_score(raw_value, stats.mean, stats.std);
    DomainScore {
        z_score: z,
        percentile: percentile_from_z(z),
    }
}

/// Per-domain z-scores and percentiles for a set of raw scores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainStandings {
    /// Z-score per domain
    pub z_scores: BTreeMap<Domain, f64>,
    /// Percentile per domain
    pub percentiles: BTreeMap<Domain, u8>,
}

/// Score every supplied domain the table has statistics for
///
/// Domains without statistics and non-finite raw values are left out rather
/// than reported as NaN.
#[must_use]
pub fn score_all(domains: &BTreeMap<Domain, f64>, data: &NormativeData) -> DomainStandings {
    let mut standings = DomainStandings::default();
    for (domain, raw) in domains {
        if !raw.is_finite() {
            continue;
        }
        if let Some(stats) = data.stats_for(*domain) {
            let scored = score(*raw, stats);
            standings.z_scores.insert(*domain, scored.z_score);
            standings.percentiles.insert(*domain, scored.percentile);
        }
    }
    standings
}
