use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use derive_new::new;
use serde::{Serialize, Serializer};

use crate::features::OrderedFeatures;

/// A semantic dataset version
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, new)]
pub struct Version {
    /// Incompatible changes to the features or splits
    pub major: u32,

    /// Compatible additions
    pub minor: u32,

    /// Fixes that leave the data unchanged
    pub patch: u32,
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value
            .split('.')
            .map(|part| part.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionError::Invalid(value.to_string()))?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
            _ => Err(VersionError::Invalid(value.to_string())),
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Version Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The string is not of the form major.minor.patch
    #[error("invalid version {0}, expected major.minor.patch")]
    Invalid(String),
}

/// Descriptive metadata for one config of a dataset, as published to a catalog
#[derive(Clone, Debug, Serialize, new)]
pub struct DatasetInfo {
    /// The dataset name (e.g., "conll2002")
    pub name: String,

    /// The selected builder config (e.g., "es")
    pub config_name: String,

    /// The dataset version
    pub version: Version,

    /// Release notes keyed by version
    pub release_notes: BTreeMap<String, String>,

    /// A human-readable description
    pub description: String,

    /// The dataset homepage
    pub homepage: String,

    /// A BibTeX citation
    pub citation: String,

    /// The example schema
    pub features: OrderedFeatures,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_version_round_trips_through_literal() {
        let version: Version = "1.0.0".parse().unwrap();

        assert_eq!(version, Version::new(1, 0, 0));
        assert_eq!(version.to_string(), "1.0.0");
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.0.0\"");
    }

    #[test]
    fn test_invalid_versions() {
        for value in ["1.0", "1.0.0.0", "v1.0.0", ""] {
            assert_eq!(
                value.parse::<Version>(),
                Err(VersionError::Invalid(value.to_string()))
            );
        }
    }
}
