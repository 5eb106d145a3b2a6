use std::path::Path;

use anyhow::anyhow;
use burn::config::Config as _;

use super::Format;

/// Settings shared by every command, optionally loaded from a JSON file
#[derive(Debug, burn::config::Config)]
pub struct Settings {
    /// The location of the top-level data directory
    #[config(default = "\"data\".to_string()")]
    pub data_dir: String,

    /// How command output is rendered
    #[config(default = "Format::Json")]
    pub format: Format,
}

impl Settings {
    /// Load settings from a file, or fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path)
                .map_err(|e| anyhow!("Unable to load settings from {}: {}", path.display(), e)),
            None => Ok(Self::new()),
        }
    }
}
