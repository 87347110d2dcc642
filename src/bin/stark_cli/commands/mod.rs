// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for stark-cli
// ABOUTME: Provides access to scoring and normative table commands

pub mod norms;
pub mod score;
