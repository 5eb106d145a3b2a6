/// CLI commands
pub mod commands;

/// Output formats
pub mod format;

/// CLI settings
pub mod settings;

pub use commands::Command;
pub use format::Format;
pub use settings::Settings;
