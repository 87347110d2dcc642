// ABOUTME: Configuration module for the scoring engine and its command-line tooling
// ABOUTME: Resolves the normative table source and load options from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: [`EngineConfig`], read from `STARK_*` variables and
//!   overridable by CLI flags

/// Engine configuration from environment variables
pub mod environment;

pub use environment::{env_keys, EngineConfig};
