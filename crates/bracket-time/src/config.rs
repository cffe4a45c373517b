//! Timestamp configuration
//!
//! The only setting is the layout used for timestamps in interval notation.
//! Hosts usually embed [`TimeConfig`] in their own serde configuration, or
//! load it from TOML text:
//!
//! ```toml
//! layout = "%Y-%m-%d %H:%M:%S"
//! ```

use bracket_domain::NotationError;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::TimeLayout;
use crate::nullable::NullableTimeInterval;
use crate::time::TimeInterval;

/// Configuration for parsing and formatting time intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Timestamp layout, `"rfc3339"` unless set
    #[serde(default)]
    pub layout: TimeLayout,
}

impl TimeConfig {
    /// Create a configuration with the given layout
    pub fn new(layout: TimeLayout) -> Self {
        Self { layout }
    }

    /// Load configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Parse a time interval using the configured layout
    pub fn parse_interval(&self, text: &str) -> Result<TimeInterval, NotationError> {
        TimeInterval::parse_with_layout(text, &self.layout)
    }

    /// Parse a nullable time interval using the configured layout
    pub fn parse_nullable_interval(&self, text: &str) -> Result<NullableTimeInterval, NotationError> {
        NullableTimeInterval::parse_with_layout(text, &self.layout)
    }

    /// Format a time interval using the configured layout
    pub fn format_interval(&self, interval: &TimeInterval) -> String {
        interval.format_with_layout(&self.layout)
    }

    /// Format a nullable time interval using the configured layout
    pub fn format_nullable_interval(&self, interval: &NullableTimeInterval) -> String {
        interval.format_with_layout(&self.layout)
    }
}
