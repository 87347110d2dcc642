// ABOUTME: Weighted Fitness Index aggregation over supplied domains
// ABOUTME: Renormalizes by the weight actually matched so partial profiles stay scorable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stark_core::models::Domain;
use std::collections::BTreeMap;

/// Weighted average of the domains present in both maps
///
/// A domain contributes only when it has a finite score and a finite,
/// non-zero weight. The result is divided by the sum of contributing weights,
/// so missing domains shrink the denominator instead of dragging the index
/// toward zero. Returns `0.0` when nothing contributes. Unrounded.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn weighted_average(scores: &BTreeMap<Domain, f64>, weights: &BTreeMap<Domain, f64>) -> f64 {
    let mut total_value = 0.0;
    let mut total_weight = 0.0;

    for (domain, score) in scores {
        let Some(&weight) = weights.get(domain) else {
            continue;
        };
        if !score.is_finite() || !weight.is_finite() || weight == 0.0 {
            continue;
        }
        total_value += score * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    total_value / total_weight
}
