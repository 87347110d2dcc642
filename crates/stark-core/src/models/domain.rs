// ABOUTME: Fitness domain enumeration scored by the engine
// ABOUTME: Defines the six domains with lenient parsing and canonical serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the six independently scored fitness categories
///
/// Serialized with its canonical name (`"BodyComp"` for body composition).
/// Parsing ignores case, whitespace, `_` and `-`, so labels such as
/// `"Body Comp"` or `"bodyComp"` coming from a data asset resolve too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Domain {
    /// Maximal and relative strength
    Strength,
    /// Muscular and cardiovascular endurance
    Endurance,
    /// Explosive power output
    Power,
    /// Joint range of motion and flexibility
    Mobility,
    /// Body composition
    BodyComp,
    /// Recovery capacity (sleep, HRV, resting heart rate)
    Recovery,
}

impl Domain {
    /// Every domain, in the order the dashboard presents them
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Endurance,
        Self::Power,
        Self::Mobility,
        Self::BodyComp,
        Self::Recovery,
    ];

    /// Canonical name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::Power => "Power",
            Self::Mobility => "Mobility",
            Self::BodyComp => "BodyComp",
            Self::Recovery => "Recovery",
        }
    }
}

/// Returned when a label does not name any fitness domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fitness domain '{0}'")]
pub struct UnknownDomainError(pub String);

impl FromStr for Domain {
    type Err = UnknownDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "strength" => Ok(Self::Strength),
            "endurance" => Ok(Self::Endurance),
            "power" => Ok(Self::Power),
            "mobility" => Ok(Self::Mobility),
            "bodycomp" | "bodycomposition" => Ok(Self::BodyComp),
            "recovery" => Ok(Self::Recovery),
            _ => Err(UnknownDomainError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Domain {
    type Error = UnknownDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Domain> for &'static str {
    fn from(domain: Domain) -> Self {
        domain.as_str()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
