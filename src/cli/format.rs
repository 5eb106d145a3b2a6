use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Output formats for command results
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON
    Json,

    /// YAML
    Yaml,
}

impl Format {
    /// Render a value in this format
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, FormatError> {
        let rendered = match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
        };

        Ok(rendered)
    }
}

impl TryFrom<&str> for Format {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(FormatError::Unknown(value.to_string())),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        };

        write!(f, "{}", name)
    }
}

/// Format Error
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// No format found for the given string
    #[error("no format found for {0}")]
    Unknown(String),

    /// JSON serialization failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
