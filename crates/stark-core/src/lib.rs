// ABOUTME: Core types and constants for the STARK fitness scoring engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # STARK Core
//!
//! Foundation crate providing the shared types for the STARK fitness
//! self-assessment engine. The scoring algorithms live in
//! `stark-intelligence`; this crate only defines what flows in and out of them.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Default normative statistics, weights, and tier thresholds
//! - **models**: `UserMetrics`, `ScoringResult`, `Domain`, `Gender`, `PerformanceTier`

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring constants organized by domain
pub mod constants;

/// Input and output data models for the scoring engine
pub mod models;
