// ABOUTME: Pluggable conversion of raw domain inputs into 0-100 domain scores
// ABOUTME: Identity by default; per-domain or closure-based strategies can be injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain normalization hook
//!
//! Domain scores currently arrive already on a 0-100 scale, so the engine
//! defaults to [`IdentityNormalizer`]. Unit-aware conversions (a one-rep-max
//! in kilograms turned into a strength score, say) plug in here without
//! touching the orchestrator.
//!
//! ```rust
//! use stark_core::models::Domain;
//! use stark_intelligence::normalization::PerDomainNormalizer;
//!
//! // Bodyweight-relative squat (1.0x - 2.5x) mapped onto 0-100
//! let normalizer = PerDomainNormalizer::new()
//!     .with(Domain::Strength, |ratio| ((ratio - 1.0) / 1.5 * 100.0).clamp(0.0, 100.0));
//! ```

use stark_core::models::Domain;
use std::collections::BTreeMap;
use std::fmt;

/// Converts a raw domain input into the score the engine aggregates
pub trait DomainNormalizer: Send + Sync {
    /// Normalized score for `raw` in `domain`
    fn normalize(&self, domain: Domain, raw: f64) -> f64;
}

/// Any `Fn(Domain, f64) -> f64` closure is a normalizer
impl<F> DomainNormalizer for F
where
    F: Fn(Domain, f64) -> f64 + Send + Sync,
{
    fn normalize(&self, domain: Domain, raw: f64) -> f64 {
        self(domain, raw)
    }
}

/// Pass-through normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl DomainNormalizer for IdentityNormalizer {
    fn normalize(&self, _domain: Domain, raw: f64) -> f64 {
        raw
    }
}

type Transform = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// One transform per domain; domains without a transform pass through
#[derive(Default)]
pub struct PerDomainNormalizer {
    transforms: BTreeMap<Domain, Transform>,
}

impl PerDomainNormalizer {
    /// Normalizer with no transforms (behaves like the identity)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the transform for `domain`, replacing any previous one
    #[must_use]
    pub fn with<F>(mut self, domain: Domain, transform: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.transforms.insert(domain, Box::new(transform));
        self
    }
}

impl DomainNormalizer for PerDomainNormalizer {
    fn normalize(&self, domain: Domain, raw: f64) -> f64 {
        self.transforms
            .get(&domain)
            .map_or(raw, |transform| transform(raw))
    }
}

impl fmt::Debug for PerDomainNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerDomainNormalizer")
            .field("domains", &self.transforms.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Apply `normalizer` to every score in `domains`
///
/// Scores that are not finite, before or after normalization, are dropped.
#[must_use]
pub fn normalize_scores(
    normalizer: &dyn DomainNormalizer,
    domains: &BTreeMap<Domain, f64>,
) -> BTreeMap<Domain, f64> {
    domains
        .iter()
        .filter(|(_, raw)| raw.is_finite())
        .map(|(domain, raw)| (*domain, normalizer.normalize(*domain, *raw)))
        .filter(|(_, score)| score.is_finite())
        .collect()
}
