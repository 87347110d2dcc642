// ABOUTME: Statistical primitives for norm-referenced scoring
// ABOUTME: Z-score, clamped logistic normal-CDF approximation, and result rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Statistical primitives
//!
//! The normal CDF is approximated with the logistic form
//! `P(z) = 1 / (1 + exp(-0.07056·z³ - 1.5976·z))`, evaluated on `z` clamped
//! to `[-3.5, 3.5]`. Over that interval the absolute error against the exact
//! CDF stays below `1.5e-4`, far under the one-percentile resolution of the
//! output.

/// Logistic CDF approximation coefficients
mod cdf_coefficients {
    /// Cubic term coefficient
    pub const CUBIC: f64 = 0.070_56;
    /// Linear term coefficient
    pub const LINEAR: f64 = 1.5976;
    /// Inputs are clamped to `[-Z_CLAMP, Z_CLAMP]`
    pub const Z_CLAMP: f64 = 3.5;
}

use cdf_coefficients::{CUBIC, LINEAR, Z_CLAMP};

/// Number of standard deviations `value` lies from `mean`
///
/// A zero `std` means the population has no spread to compare against, so the
/// subject is treated as average and `0.0` is returned.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn z_score(value: f64, mean: f64, std: f64) -> f64 {
    if std == 0.0 {
        return 0.0;
    }
    (value - mean) / std
}

/// Percentile (0-100) of a z-score under the standard normal distribution
///
/// `NaN` is scored as the mean.
#[must_use]
pub fn percentile_from_z(z: f64) -> u8 {
    let z = if z.is_nan() {
        0.0
    } else {
        z.clamp(-Z_CLAMP, Z_CLAMP)
    };
    let probability = 1.0 / (1.0 + (-CUBIC * z.powi(3) - LINEAR * z).exp());
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Round to one decimal place, halves away from zero (`74.25` becomes `74.3`)
#[must_use]
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_score_basic() {
        assert!((z_score(50.0, 40.0, 10.0) - 1.0).abs() < f64::EPSILON);
        assert!((z_score(35.0, 40.0, 10.0) + 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_z_score_zero_std_is_average() {
        for value in [-100.0, 0.0, 42.0, 1e9] {
            assert!(z_score(value, 40.0, 0.0).abs() < f64::EPSILON);
        }
        assert!(z_score(40.0, 40.0, 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_z_score_tiny_std_is_not_zero() {
        assert!((z_score(41.0, 40.0, 1e-17) / 1e17 - 1.0).abs() < 1e-9);
        assert!(z_score(39.0, 40.0, 1e-20) < 0.0);
    }

    #[test]
    fn test_percentile_reference_points() {
        assert!((49..=51).contains(&percentile_from_z(0.0)));
        assert!((83..=85).contains(&percentile_from_z(1.0)));
        assert!((1..=3).contains(&percentile_from_z(-2.0)));
    }

    #[test]
    fn test_percentile_clamps_tails() {
        assert_eq!(percentile_from_z(3.5), 100);
        assert_eq!(percentile_from_z(250.0), 100);
        assert_eq!(percentile_from_z(f64::INFINITY), 100);
        assert_eq!(percentile_from_z(-3.5), 0);
        assert_eq!(percentile_from_z(f64::NEG_INFINITY), 0);
        assert_eq!(percentile_from_z(f64::NAN), 50);
    }

    #[test]
    fn test_percentile_monotonic_over_clamp_range() {
        let mut previous = percentile_from_z(-3.5);
        let mut z = -3.5;
        while z <= 3.5 {
            let current = percentile_from_z(z);
            assert!(current >= previous, "percentile decreased at z={z}");
            assert!(current <= 100);
            previous = current;
            z += 0.01;
        }
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert!((round_to_one_decimal(74.25) - 74.3).abs() < 1e-9);
        assert!((round_to_one_decimal(44.5) - 44.5).abs() < 1e-9);
        assert!((round_to_one_decimal(-1.25) + 1.3).abs() < 1e-9);
    }
}
