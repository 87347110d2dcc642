// ABOUTME: Load-time invariant checks for normative tables
// ABOUTME: Rejects unordered VO2max norms, overlapping brackets, and invalid statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stark_core::models::{Domain, Gender};
use std::collections::BTreeMap;

use super::{DomainStats, NormativeDataError, Vo2maxNormGroup};

pub(super) fn validate_domain_stats(
    stats: &BTreeMap<Domain, DomainStats>,
) -> Result<(), NormativeDataError> {
    for (domain, entry) in stats {
        if !entry.mean.is_finite() {
            return Err(NormativeDataError::NonFiniteMean {
                context: format!("domain {domain}"),
            });
        }
        check_std(entry.std, || format!("domain {domain}"))?;
    }
    Ok(())
}

pub(super) fn validate_weights(weights: &BTreeMap<Domain, f64>) -> Result<(), NormativeDataError> {
    for (domain, weight) in weights {
        if !(0.0..=1.0).contains(weight) {
            return Err(NormativeDataError::InvalidWeight {
                domain: *domain,
                weight: *weight,
            });
        }
    }
    Ok(())
}

/// Groups must already be sorted by minimum age
pub(super) fn validate_partition(
    gender: &Gender,
    groups: &[Vo2maxNormGroup],
) -> Result<(), NormativeDataError> {
    if groups.is_empty() {
        return Err(NormativeDataError::EmptyPartition {
            gender: gender.to_string(),
        });
    }

    for group in groups {
        if !group.mean.is_finite() {
            return Err(NormativeDataError::NonFiniteMean {
                context: format!("{gender} {}", group.age_range),
            });
        }
        check_std(group.std_dev, || format!("{gender} {}", group.age_range))?;
    }

    for pair in groups.windows(2) {
        let (younger, older) = (&pair[0], &pair[1]);
        if older.age_range.min <= younger.age_range.max {
            return Err(NormativeDataError::OverlappingAgeRanges {
                gender: gender.to_string(),
                first: younger.age_range.to_string(),
                second: older.age_range.to_string(),
            });
        }
        if older.mean > younger.mean {
            return Err(NormativeDataError::NonMonotonicNorms {
                gender: gender.to_string(),
                younger: younger.age_range.to_string(),
                younger_mean: younger.mean,
                older: older.age_range.to_string(),
                older_mean: older.mean,
            });
        }
    }

    Ok(())
}

fn check_std(value: f64, context: impl FnOnce() -> String) -> Result<(), NormativeDataError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NormativeDataError::InvalidStdDev {
            context: context(),
            value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::normative::AgeRange;

    fn group(min: u16, max: u16, mean: f64) -> Vo2maxNormGroup {
        Vo2maxNormGroup {
            age_range: AgeRange { min, max },
            mean,
            std_dev: 6.0,
        }
    }

    #[test]
    fn test_rising_means_rejected() {
        let groups = [group(20, 29, 40.0), group(30, 39, 41.5)];
        let error = validate_partition(&Gender::male(), &groups).unwrap_err();
        assert!(matches!(error, NormativeDataError::NonMonotonicNorms { .. }));
    }

    #[test]
    fn test_equal_means_accepted() {
        let groups = [group(20, 29, 40.0), group(30, 39, 40.0), group(40, 49, 35.0)];
        assert!(validate_partition(&Gender::male(), &groups).is_ok());
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let groups = [group(20, 30, 40.0), group(30, 39, 38.0)];
        let error = validate_partition(&Gender::female(), &groups).unwrap_err();
        assert!(matches!(error, NormativeDataError::OverlappingAgeRanges { .. }));
    }

    #[test]
    fn test_negative_std_rejected() {
        let mut groups = [group(20, 29, 40.0)];
        groups[0].std_dev = -1.0;
        assert!(matches!(
            validate_partition(&Gender::male(), &groups),
            Err(NormativeDataError::InvalidStdDev { .. })
        ));
    }

    #[test]
    fn test_weight_bounds() {
        let mut weights = BTreeMap::new();
        weights.insert(Domain::Power, 1.2);
        assert!(validate_weights(&weights).is_err());
        weights.insert(Domain::Power, 0.0);
        assert!(validate_weights(&weights).is_ok());
        weights.insert(Domain::Power, f64::NAN);
        assert!(validate_weights(&weights).is_err());
    }
}
