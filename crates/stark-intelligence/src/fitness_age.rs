// ABOUTME: Fitness Age estimation from VO2max against age-bucketed population means
// ABOUTME: Brackets the user between two age groups and interpolates their midpoint ages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness Age
//!
//! The Fitness Age is the age at which the population mean `VO2max` equals
//! the user's. Groups are scanned youngest first; because the loader
//! guarantees means never rise with age, the groups whose mean is at or
//! above the user's value form a prefix of the list:
//!
//! - `lower`: last group of that prefix (the oldest group the user still trails or matches)
//! - `upper`: first group after it (the youngest group the user beats)
//!
//! When both exist the answer is interpolated between their midpoint ages.
//! A user who beats every group gets the youngest modeled age. A user exactly
//! on the oldest group's mean gets that group's midpoint; anything below it
//! gets the oldest modeled age.

use stark_core::models::Gender;
use tracing::debug;

use crate::normative::{NormativeData, Vo2maxNormGroup};
use crate::statistics::round_to_one_decimal;

/// Estimate the Fitness Age for a `VO2max` value
///
/// Returns `None` when the table has no norms for `gender` or when `vo2max`
/// is not a finite number. The result is rounded to one decimal place.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn calculate_fitness_age(vo2max: f64, gender: &Gender, data: &NormativeData) -> Option<f64> {
    if !vo2max.is_finite() {
        return None;
    }
    let groups = data.norms_for(gender)?;
    let (first, last) = (groups.first()?, groups.last()?);

    let (lower, upper) = bracket(vo2max, groups);

    match (lower, upper) {
        (None, _) => {
            debug!(vo2max, %gender, "VO2max above every age group mean");
            Some(f64::from(first.age_range.min))
        }
        (Some(lower), None) if vo2max == lower.mean => Some(lower.age_range.midpoint()),
        (Some(_), None) => {
            debug!(vo2max, %gender, "VO2max below every age group mean");
            Some(f64::from(last.age_range.max))
        }
        (Some(lower), Some(upper)) => Some(interpolate(vo2max, lower, upper)),
    }
}

fn bracket(
    vo2max: f64,
    groups: &[Vo2maxNormGroup],
) -> (Option<&Vo2maxNormGroup>, Option<&Vo2maxNormGroup>) {
    let mut lower = None;
    for group in groups {
        if group.mean < vo2max {
            return (lower, Some(group));
        }
        lower = Some(group);
    }
    (lower, None)
}

fn interpolate(vo2max: f64, lower: &Vo2maxNormGroup, upper: &Vo2maxNormGroup) -> f64 {
    let lower_age = lower.age_range.midpoint();
    let upper_age = upper.age_range.midpoint();
    let mean_gap = lower.mean - upper.mean;

    // Bracketing keeps the gap positive; equal means resolve to the lower midpoint
    if mean_gap.abs() < f64::EPSILON {
        return lower_age;
    }

    let fraction = (vo2max - upper.mean) / mean_gap;
    round_to_one_decimal(fraction.mul_add(lower_age - upper_age, upper_age))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::normative::{AgeRange, NormativeMetadata};
    use std::collections::BTreeMap;

    fn table() -> NormativeData {
        let groups = [(20, 29, 44.0), (30, 39, 42.0), (40, 49, 40.0), (50, 59, 36.0)]
            .into_iter()
            .map(|(min, max, mean)| Vo2maxNormGroup {
                age_range: AgeRange { min, max },
                mean,
                std_dev: 8.0,
            })
            .collect();
        NormativeData::new(
            NormativeMetadata::default(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::from([(Gender::male(), groups)]),
        )
        .unwrap()
    }

    #[test]
    fn test_exact_group_mean_returns_midpoint() {
        let data = table();
        assert_eq!(calculate_fitness_age(42.0, &Gender::male(), &data), Some(34.5));
        assert_eq!(calculate_fitness_age(40.0, &Gender::male(), &data), Some(44.5));
    }

    #[test]
    fn test_oldest_group_mean_returns_its_midpoint() {
        let data = table();
        assert_eq!(calculate_fitness_age(36.0, &Gender::male(), &data), Some(54.5));
        assert_eq!(calculate_fitness_age(36.01, &Gender::male(), &data), Some(54.5));
        assert_eq!(calculate_fitness_age(35.99, &Gender::male(), &data), Some(59.0));
    }

    #[test]
    fn test_interpolates_between_brackets() {
        let data = table();
        // Halfway between the 40-49 (40.0) and 50-59 (36.0) means
        assert_eq!(calculate_fitness_age(38.0, &Gender::male(), &data), Some(49.5));
        // A quarter of the way from 30-39 (42.0) toward 20-29 (44.0)
        assert_eq!(calculate_fitness_age(42.5, &Gender::male(), &data), Some(32.0));
    }

    #[test]
    fn test_beyond_table_edges() {
        let data = table();
        assert_eq!(calculate_fitness_age(60.0, &Gender::male(), &data), Some(20.0));
        assert_eq!(calculate_fitness_age(20.0, &Gender::male(), &data), Some(59.0));
    }

    #[test]
    fn test_unknown_partition_and_nan() {
        let data = table();
        assert_eq!(calculate_fitness_age(40.0, &Gender::female(), &data), None);
        assert_eq!(calculate_fitness_age(f64::NAN, &Gender::male(), &data), None);
    }

    #[test]
    fn test_non_increasing_in_vo2max() {
        let data = table();
        let mut previous = f64::INFINITY;
        let mut vo2max = 15.0;
        while vo2max <= 70.0 {
            let age = calculate_fitness_age(vo2max, &Gender::male(), &data).unwrap();
            assert!(age <= previous, "age rose to {age} at vo2max {vo2max}");
            previous = age;
            vo2max += 0.125;
        }
    }
}
