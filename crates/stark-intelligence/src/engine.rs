// ABOUTME: Scoring orchestrator composing normalization, domain scoring, index and age
// ABOUTME: Single entry point that turns UserMetrics into a ScoringResult without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scoring Engine
//!
//! ```rust
//! use stark_core::models::{Domain, UserMetrics};
//! use stark_intelligence::{NormativeData, ScoringEngine};
//!
//! # fn main() -> Result<(), stark_intelligence::NormativeDataError> {
//! let engine = ScoringEngine::new(NormativeData::builtin()?);
//! let user = UserMetrics::new(28.0, "male", 52.0)
//!     .with_domain(Domain::Strength, 85.0)
//!     .with_domain(Domain::Endurance, 72.0);
//!
//! let result = engine.calculate_fitness_index(&user);
//! assert!(result.vo2_percentile.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! Sub-computations are isolated: a gender or age the table does not cover
//! nulls the `VO2max` fields but leaves the Fitness Index and domain
//! standings intact.

use rayon::prelude::*;
use stark_core::models::{Gender, PerformanceTier, ScoringResult, UserMetrics};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::composite::weighted_average;
use crate::domain_scorer::score_all;
use crate::fitness_age;
use crate::normalization::{normalize_scores, DomainNormalizer, IdentityNormalizer};
use crate::normative::NormativeData;
use crate::statistics::{percentile_from_z, round_to_one_decimal, z_score};

/// Scores users against one immutable normative table
///
/// Cheap to share: the table sits behind an `Arc` and the engine is
/// `Send + Sync`, so concurrent requests can use one instance.
pub struct ScoringEngine {
    data: Arc<NormativeData>,
    normalizer: Box<dyn DomainNormalizer>,
}

impl ScoringEngine {
    /// Engine with pass-through domain normalization
    pub fn new(data: impl Into<Arc<NormativeData>>) -> Self {
        Self::with_normalizer(data, IdentityNormalizer)
    }

    /// Engine with a custom domain normalization strategy
    pub fn with_normalizer(
        data: impl Into<Arc<NormativeData>>,
        normalizer: impl DomainNormalizer + 'static,
    ) -> Self {
        Self {
            data: data.into(),
            normalizer: Box::new(normalizer),
        }
    }

    /// The table this engine scores against
    #[must_use]
    pub fn normative_data(&self) -> &NormativeData {
        &self.data
    }

    /// Compute every metric for one user
    #[must_use]
    pub fn calculate_fitness_index(&self, user: &UserMetrics) -> ScoringResult {
        let domain_scores = normalize_scores(self.normalizer.as_ref(), &user.domains);

        let fitness_index = round_to_one_decimal(weighted_average(
            &domain_scores,
            self.data.domain_weights(),
        ));

        let vo2_percentile = self.calculate_vo2max_percentile(user.vo2max, user.age, &user.gender);
        let fitness_age = self.calculate_fitness_age(user.vo2max, &user.gender);
        let standings = score_all(&domain_scores, &self.data);

        debug!(
            gender = %user.gender,
            age = user.age,
            fitness_index,
            vo2_percentile = ?vo2_percentile,
            fitness_age = ?fitness_age,
            domains = domain_scores.len(),
            "Scored user metrics"
        );

        ScoringResult {
            fitness_index,
            fitness_age,
            vo2_percentile,
            domain_scores,
            z_scores: standings.z_scores,
            domain_percentiles: standings.percentiles,
            vo2_tier: vo2_percentile.map(PerformanceTier::from_percentile),
        }
    }

    /// `VO2max` percentile within the user's age and gender bucket
    ///
    /// `None` when no bucket covers the user or `vo2max` is not finite.
    #[must_use]
    pub fn calculate_vo2max_percentile(&self, vo2max: f64, age: f64, gender: &Gender) -> Option<u8> {
        if !vo2max.is_finite() {
            return None;
        }
        let Some(group) = self.data.find_norm_group(age, gender) else {
            debug!(%gender, age, "No VO2max norm group covers this user");
            return None;
        };
        Some(percentile_from_z(z_score(vo2max, group.mean, group.std_dev)))
    }

    /// Fitness Age for a `VO2max` value
    #[must_use]
    pub fn calculate_fitness_age(&self, vo2max: f64, gender: &Gender) -> Option<f64> {
        fitness_age::calculate_fitness_age(vo2max, gender, &self.data)
    }

    /// Score independent users in parallel; output order matches input order
    #[must_use]
    pub fn calculate_batch(&self, users: &[UserMetrics]) -> Vec<ScoringResult> {
        users
            .par_iter()
            .map(|user| self.calculate_fitness_index(user))
            .collect()
    }
}

impl fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("normative_version", &self.data.metadata().version)
            .finish_non_exhaustive()
    }
}
