// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default normative statistics, weight-sum tolerance, and percentile tier boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values that describe the default normative dataset and the presentation
//! bands used on top of computed percentiles. Tables loaded at runtime may
//! override the statistics, never the tier boundaries.

/// Service identification for structured logging
pub mod service_names {
    /// Name reported by the logging layer and the CLI
    pub const STARK_FITNESS: &str = "stark-fitness";
}

/// Default per-domain population statistics (`mean`, `std`) on the 0-100 scale.
///
/// Used when a normative table declares a domain weight without matching stats.
pub mod domain_defaults {
    /// Strength mean
    pub const STRENGTH_MEAN: f64 = 50.0;
    /// Strength standard deviation
    pub const STRENGTH_STD: f64 = 15.0;
    /// Endurance mean
    pub const ENDURANCE_MEAN: f64 = 45.0;
    /// Endurance standard deviation
    pub const ENDURANCE_STD: f64 = 12.0;
    /// Power mean
    pub const POWER_MEAN: f64 = 40.0;
    /// Power standard deviation
    pub const POWER_STD: f64 = 10.0;
    /// Mobility mean
    pub const MOBILITY_MEAN: f64 = 55.0;
    /// Mobility standard deviation
    pub const MOBILITY_STD: f64 = 14.0;
    /// Body composition mean
    pub const BODY_COMP_MEAN: f64 = 60.0;
    /// Body composition standard deviation
    pub const BODY_COMP_STD: f64 = 18.0;
    /// Recovery mean
    pub const RECOVERY_MEAN: f64 = 50.0;
    /// Recovery standard deviation
    pub const RECOVERY_STD: f64 = 13.0;
}

/// Domain weight checks
pub mod domain_weights {
    /// Allowed drift of the weight sum from 1.0 before the loader warns
    pub const SUM_TOLERANCE: f64 = 0.01;
}

/// Percentile lower bounds for each performance tier
pub mod tier_thresholds {
    /// Excellent at or above this percentile
    pub const EXCELLENT: u8 = 85;
    /// Good at or above this percentile
    pub const GOOD: u8 = 70;
    /// Average at or above this percentile
    pub const AVERAGE: u8 = 40;
    /// Fair at or above this percentile; below is "needs work"
    pub const FAIR: u8 = 25;
}

/// Metadata reported for tables that omit it
pub mod normative_metadata {
    /// Dataset version
    pub const VERSION: &str = "1.1.0";
    /// Dataset description
    pub const DESCRIPTION: &str = "Normative data for fitness scoring based on ACSM guidelines";
    /// Last revision of the dataset
    pub const LAST_UPDATED: &str = "2024-10";
    /// Publication the statistics are drawn from
    pub const SOURCE: &str = "ACSM Guidelines, 11th Ed.";
    /// Standard deviation assumed when a VO2max group omits it
    pub const DEFAULT_GROUP_STD_DEV: f64 = 1.0;
}
