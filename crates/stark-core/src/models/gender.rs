// ABOUTME: Normative partition key for VO2max norms
// ABOUTME: Normalized string newtype so tables can add partitions without code changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key selecting a VO2max norm partition
///
/// The bundled dataset only models `male` and `female`, but nothing in the
/// engine branches on the value: any key the loaded table carries is usable.
/// Keys are trimmed and lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Gender(String);

impl Gender {
    /// Build a normalized key
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_lowercase())
    }

    /// The `male` partition
    #[must_use]
    pub fn male() -> Self {
        Self::new("male")
    }

    /// The `female` partition
    #[must_use]
    pub fn female() -> Self {
        Self::new("female")
    }

    /// Normalized key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.0
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
