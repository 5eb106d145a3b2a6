use std::fmt::Display;

/// The unique string token for listing builder configs
pub static CONFIGS: &str = "configs";

/// The unique string token for printing dataset metadata
pub static INFO: &str = "info";

/// The unique string token for printing download urls
pub static URLS: &str = "urls";

/// The unique string token for resolving downloaded files
pub static RESOLVE: &str = "resolve";

/// Available Commands
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Command {
    /// List the builder configs of a dataset
    Configs,

    /// Print the metadata of a dataset config
    Info,

    /// Print the download url of each split
    Urls,

    /// Resolve each split to a file under the data directory
    Resolve,
}

impl Command {
    /// All available commands
    pub const ALL: [Command; 4] = [
        Command::Configs,
        Command::Info,
        Command::Urls,
        Command::Resolve,
    ];

    /// Get the unique string token that identifies this command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Configs => CONFIGS,
            Command::Info => INFO,
            Command::Urls => URLS,
            Command::Resolve => RESOLVE,
        }
    }
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == value)
            .ok_or_else(|| CommandError::Unknown(value.to_string()))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Command Error
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// No command found for the given string
    #[error("no command found for {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_command_names() {
        for command in Command::ALL {
            assert_eq!(Command::try_from(command.as_str()).unwrap(), command);
        }

        assert_eq!(
            Command::try_from("train").unwrap_err().to_string(),
            "no command found for train"
        );
    }
}
