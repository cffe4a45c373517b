//! Timestamp layouts - how timestamps are written inside interval notation

use std::fmt;

use bracket_domain::ValueCodec;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ConfigError;

/// Name under which the RFC 3339 layout is written in configuration
pub const RFC3339_NAME: &str = "rfc3339";

/// Text layout for timestamp endpoints
///
/// Either RFC 3339 (the default) or a chrono strftime pattern such as
/// `%Y-%m-%d %H:%M:%S`. Patterns are checked when the layout is built.
///
/// In configuration the layout is a single string: `"rfc3339"` or a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeLayout {
    kind: LayoutKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
enum LayoutKind {
    #[default]
    Rfc3339,
    Pattern(String),
}

impl TimeLayout {
    /// RFC 3339, e.g. `2022-10-01T00:00:00Z`
    pub fn rfc3339() -> Self {
        Self::default()
    }

    /// A chrono strftime pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_time::TimeLayout;
    ///
    /// assert!(TimeLayout::pattern("%Y-%m-%d %H:%M:%S").is_ok());
    /// assert!(TimeLayout::pattern("%Y-%Q").is_err());
    /// ```
    pub fn pattern(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidLayout {
                layout: pattern,
                reason: "unsupported format specifier".to_string(),
            });
        }
        Ok(Self {
            kind: LayoutKind::Pattern(pattern),
        })
    }

    /// The strftime pattern, or `None` for RFC 3339
    pub fn as_pattern(&self) -> Option<&str> {
        match &self.kind {
            LayoutKind::Rfc3339 => None,
            LayoutKind::Pattern(p) => Some(p),
        }
    }

    /// Parse a timestamp written in this layout
    ///
    /// RFC 3339 input may carry any offset; the result is normalized to UTC.
    /// A pattern is tried as an offset-bearing datetime, then as a naive
    /// datetime taken as UTC, then as a bare date at midnight UTC.
    pub fn parse_time(&self, text: &str) -> Result<DateTime<Utc>, String> {
        match &self.kind {
            LayoutKind::Rfc3339 => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| format!("not an RFC 3339 timestamp: {}", e)),
            LayoutKind::Pattern(pattern) => parse_with_pattern(text, pattern),
        }
    }

    /// Write a timestamp in this layout
    pub fn format_time(&self, time: &DateTime<Utc>) -> String {
        match &self.kind {
            LayoutKind::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            LayoutKind::Pattern(pattern) => time.format(pattern).to_string(),
        }
    }
}

fn parse_with_pattern(text: &str, pattern: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_str(text, pattern) {
        return Ok(dt.with_timezone(&Utc));
    }

    trace!(text, pattern, "No offset in timestamp, reading as UTC");
    let naive_err = match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(naive) => return Ok(naive.and_utc()),
        Err(e) => e,
    };

    match NaiveDate::parse_from_str(text, pattern) {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => Err(format!("does not match layout {:?}: {}", pattern, naive_err)),
    }
}

impl ValueCodec<DateTime<Utc>> for TimeLayout {
    fn parse_value(&self, text: &str) -> Result<DateTime<Utc>, String> {
        self.parse_time(text)
    }

    fn format_value(&self, value: &DateTime<Utc>) -> String {
        self.format_time(value)
    }
}

impl TryFrom<String> for TimeLayout {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case(RFC3339_NAME) {
            Ok(Self::rfc3339())
        } else {
            Self::pattern(value)
        }
    }
}

impl From<TimeLayout> for String {
    fn from(layout: TimeLayout) -> Self {
        match layout.kind {
            LayoutKind::Rfc3339 => RFC3339_NAME.to_string(),
            LayoutKind::Pattern(p) => p,
        }
    }
}

impl fmt::Display for TimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_pattern().unwrap_or(RFC3339_NAME))
    }
}
