// ABOUTME: Main library entry point for the STARK fitness scoring engine
// ABOUTME: Wires normative data loading, logging, and configuration around the scoring crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # STARK Fitness
//!
//! Normative scoring for a fitness self-assessment. A user's `VO2max` and
//! six domain scores are compared against age and gender norms to produce
//! a `VO2max` percentile, a weighted Fitness Index and a Fitness Age.
//!
//! ## Architecture
//!
//! - **`stark_core`**: shared models (`UserMetrics`, `ScoringResult`),
//!   constants and the unified error type
//! - **`stark_intelligence`**: the pure scoring kernel and the normative
//!   table loader
//! - **this crate**: environment configuration, logging setup and the
//!   `stark-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use stark_fitness::config::EngineConfig;
//! use stark_fitness::errors::AppResult;
//! use stark_fitness::models::UserMetrics;
//!
//! fn main() -> AppResult<()> {
//!     let engine = EngineConfig::from_env()?.build_engine()?;
//!     let result = engine.calculate_fitness_index(&UserMetrics::new(28.0, "male", 52.0));
//!     println!("VO2max percentile: {:?}", result.vo2_percentile);
//!     Ok(())
//! }
//! ```

/// Engine configuration from environment variables
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

// Re-export the workspace crates under their familiar module names
pub use stark_core::{constants, errors, models};
pub use stark_intelligence::{
    composite, domain_scorer, engine, fitness_age, normalization, normative, statistics,
};
pub use stark_intelligence::{NormativeData, ScoringEngine};
