// ABOUTME: User metrics record consumed by the scoring engine
// ABOUTME: Age, gender partition key, VO2max and raw per-domain scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Domain, Gender};

/// Metrics a user enters for a self-assessment
///
/// Domain scores are expected on a 0-100 scale already; the engine does not
/// range-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    /// Age in years
    pub age: f64,
    /// Normative partition key
    pub gender: Gender,
    /// Maximal oxygen uptake in mL/kg/min
    pub vo2max: f64,
    /// Raw score per domain
    #[serde(default, alias = "domainScores")]
    pub domains: BTreeMap<Domain, f64>,
}

impl UserMetrics {
    /// Create metrics without any domain scores
    pub fn new(age: f64, gender: impl Into<Gender>, vo2max: f64) -> Self {
        Self {
            age,
            gender: gender.into(),
            vo2max,
            domains: BTreeMap::new(),
        }
    }

    /// Set the raw score for one domain
    #[must_use]
    pub fn with_domain(mut self, domain: Domain, score: f64) -> Self {
        self.domains.insert(domain, score);
        self
    }

    /// Set several domain scores at once
    #[must_use]
    pub fn with_domains(mut self, scores: impl IntoIterator<Item = (Domain, f64)>) -> Self {
        self.domains.extend(scores);
        self
    }
}
