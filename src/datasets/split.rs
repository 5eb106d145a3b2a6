use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The unique string token for the training split
pub static TRAIN: &str = "train";

/// The unique string token for the development split
pub static DEV: &str = "dev";

/// The unique string token for the test split
pub static TEST: &str = "test";

/// Dataset partitions
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Training data
    Train,

    /// Development (validation) data
    Dev,

    /// Held-out test data
    Test,
}

impl Split {
    /// All splits, in order
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Get the unique string token that identifies this split
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => TRAIN,
            Split::Dev => DEV,
            Split::Test => TEST,
        }
    }
}

impl TryFrom<&str> for Split {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Split::ALL
            .into_iter()
            .find(|split| split.as_str() == value)
            .ok_or_else(|| SplitError::Unknown(value.to_string()))
    }
}

impl Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split Error
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    /// No split found for the given string
    #[error("no split found for {0}")]
    Unknown(String),
}
