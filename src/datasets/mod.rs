use std::{fmt::Display, path::PathBuf};

/// Shared CoNLL tag vocabularies, schemas and builder capability
pub mod conll;

/// The CoNLL-2002 dataset
pub mod conll2002;

/// Dataset metadata and versions
pub mod info;

/// Dataset partitions
pub mod split;

pub use info::{DatasetInfo, Version, VersionError};
pub use split::{Split, SplitError};

use crate::download::DownloadError;

/// The Dataset enum
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Dataset {
    /// CoNLL-2002 (Spanish and Dutch)
    Conll2002,
}

impl Dataset {
    /// All available datasets
    pub const ALL: [Dataset; 1] = [Dataset::Conll2002];

    /// Get the unique string token that identifies this dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Conll2002 => conll2002::DATASET,
        }
    }

    /// The names of the dataset's builder configs
    pub fn config_names(&self) -> &'static [&'static str] {
        match self {
            Dataset::Conll2002 => conll2002::CONFIG_NAMES,
        }
    }

    /// The config used when none is requested
    pub fn default_config(&self) -> &'static str {
        match self {
            Dataset::Conll2002 => conll2002::CONFIG_NAMES[0],
        }
    }
}

impl TryFrom<&str> for Dataset {
    type Error = DatasetError;

    /// Try to convert a string to a Dataset
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let name = value.to_lowercase();

        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.as_str() == name)
            .ok_or_else(|| Self::Error::Unknown(value.to_string()))
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dataset Error
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// No dataset found for the given string
    #[error("no dataset found for {0}")]
    Unknown(String),
}

/// Builder Error
#[derive(thiserror::Error, Debug)]
pub enum BuilderError {
    /// The requested config is not one of the dataset's builder configs
    #[error("no config {config} for dataset {dataset}")]
    UnknownConfig {
        /// The dataset name
        dataset: String,

        /// The requested config name
        config: String,
    },

    /// The config has no remote file name prefix
    #[error("no remote file name for config {0}")]
    MissingFileName(String),

    /// The download manager did not return a path for a split
    #[error("no downloaded file for the {0} split")]
    MissingSplit(Split),

    /// A download url could not be built
    #[error("invalid download url: {0}")]
    Url(#[from] url::ParseError),

    /// The dataset version literal is malformed
    #[error(transparent)]
    Version(#[from] VersionError),

    /// The download manager failed
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// The example generator failed on a file
    #[error("failed to generate examples from {}", path.display())]
    Generate {
        /// The file being read
        path: PathBuf,

        /// The underlying failure
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dataset_names() {
        assert_eq!(Dataset::try_from("CoNLL2002").unwrap(), Dataset::Conll2002);
        assert_eq!(Dataset::Conll2002.to_string(), "conll2002");
        assert_eq!(
            Dataset::try_from("conll2000").unwrap_err().to_string(),
            "no dataset found for conll2000"
        );
    }

    #[test]
    fn test_default_config_is_listed() {
        for dataset in Dataset::ALL {
            assert!(dataset
                .config_names()
                .contains(&dataset.default_config()));
        }
    }
}
