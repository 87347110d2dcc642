// ABOUTME: Input and output data models for the STARK scoring engine
// ABOUTME: Re-exports Domain, Gender, UserMetrics, ScoringResult and PerformanceTier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The engine is a pure transform: a [`UserMetrics`] record goes in, a
//! [`ScoringResult`] comes out. Both serialize in camelCase so a presentation
//! layer can persist and re-display them verbatim.
//!
//! ## Design Principles
//!
//! - **Closed domains, open partitions**: the six fitness domains are an enum,
//!   while [`Gender`] is a normalized lookup key so a normative table can add
//!   partitions without code changes
//! - **Null over failure**: every optional output is `Option`, never NaN

mod domain;
mod gender;
mod metrics;
mod result;

pub use domain::{Domain, UnknownDomainError};
pub use gender::Gender;
pub use metrics::UserMetrics;
pub use result::{PerformanceTier, ScoringResult};
