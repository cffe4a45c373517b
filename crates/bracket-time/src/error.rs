//! Error types for timestamp configuration

use thiserror::Error;

/// Errors raised while building a layout or loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The strftime pattern contains an unknown specifier
    #[error("Invalid time layout {layout:?}: {reason}")]
    InvalidLayout {
        /// The rejected pattern
        layout: String,
        /// What is wrong with it
        reason: String,
    },

    /// TOML text could not be read into a configuration
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
