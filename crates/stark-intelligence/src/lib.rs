// ABOUTME: Normative fitness scoring engine for the STARK self-assessment
// ABOUTME: Statistics kernel, domain scoring, composite index, fitness age and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # STARK Intelligence
//!
//! Converts raw user metrics into statistically comparable numbers:
//!
//! - **statistics**: z-scores and the logistic normal-CDF approximation
//! - **normative**: the immutable reference table and its loader/validator
//! - **`domain_scorer`**: per-domain z-score and percentile
//! - **composite**: weighted Fitness Index
//! - **`fitness_age`**: VO2max to equivalent-age interpolation
//! - **normalization**: pluggable raw-to-0-100 conversion hook
//! - **engine**: [`ScoringEngine`], the single entry point callers use
//!
//! Nothing in this crate performs I/O except the normative loader, and no
//! scoring path returns an error: unresolvable fields come back as `None`.

/// Z-score and percentile primitives
pub mod statistics;

/// Normative reference data, loading, and validation
pub mod normative;

/// Per-domain normalization against population statistics
pub mod domain_scorer;

/// Weighted aggregation of domain scores
pub mod composite;

/// VO2max based age equivalence
pub mod fitness_age;

/// Raw domain score conversion hook
pub mod normalization;

/// End-to-end scoring orchestration
pub mod engine;

pub use engine::ScoringEngine;
pub use normalization::{DomainNormalizer, IdentityNormalizer, PerDomainNormalizer};
pub use normative::{
    AgeRange, DomainStats, LoadOptions, NormativeData, NormativeDataError, NormativeMetadata,
    Vo2maxNormGroup,
};
