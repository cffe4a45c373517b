//! Nullable time interval - timestamps with optionally unbounded sides

use std::fmt;
use std::str::FromStr;

use bracket_domain::{BoundaryFlags, NotationError, NullableInterval};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::layout::TimeLayout;
use crate::time::TimeInterval;

/// An interval between two optional UTC timestamps
///
/// A missing endpoint (`NULL` in text, matched in any case) leaves that side
/// unbounded. If both are missing the interval contains nothing, and a
/// missing query time is never contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullableTimeInterval {
    inner: NullableInterval<DateTime<Utc>>,
}

impl NullableTimeInterval {
    /// Create a half-open interval `[left, right)`
    pub fn new(left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> Self {
        Self::with_flags(left, right, BoundaryFlags::default())
    }

    /// Create an interval with explicit boundary flags
    pub fn with_flags(
        left: Option<DateTime<Utc>>,
        right: Option<DateTime<Utc>>,
        flags: BoundaryFlags,
    ) -> Self {
        Self {
            inner: NullableInterval::with_flags(left, right, flags),
        }
    }

    /// Parse notation with RFC 3339 timestamps or `NULL`
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        Self::parse_with_layout(text, &TimeLayout::default())
    }

    /// Parse notation with timestamps in `layout` or `NULL`
    pub fn parse_with_layout(text: &str, layout: &TimeLayout) -> Result<Self, NotationError> {
        NullableInterval::parse_with(text, layout).map(|inner| Self { inner })
    }

    /// Left endpoint, `None` when unbounded
    pub fn left(&self) -> Option<&DateTime<Utc>> {
        self.inner.left()
    }

    /// Right endpoint, `None` when unbounded
    pub fn right(&self) -> Option<&DateTime<Utc>> {
        self.inner.right()
    }

    /// Boundary flags
    pub fn boundary_flags(&self) -> BoundaryFlags {
        self.inner.boundary_flags()
    }

    /// True if the left endpoint is part of the interval
    pub fn is_left_closed(&self) -> bool {
        self.inner.is_left_closed()
    }

    /// True if the right endpoint is part of the interval
    pub fn is_right_closed(&self) -> bool {
        self.inner.is_right_closed()
    }

    /// Check whether `time` lies in the interval; `None` never does
    pub fn contains(&self, time: Option<&DateTime<Utc>>) -> bool {
        self.inner.contains(time)
    }

    /// Check whether a present `time` lies in the interval
    pub fn contains_time(&self, time: &DateTime<Utc>) -> bool {
        self.inner.contains_value(time)
    }

    /// Render notation with timestamps in `layout`
    pub fn format_with_layout(&self, layout: &TimeLayout) -> String {
        self.inner.format_with(layout)
    }

    /// Underlying generic interval
    pub fn as_nullable(&self) -> &NullableInterval<DateTime<Utc>> {
        &self.inner
    }

    /// Both endpoints if the interval is bounded on both sides
    pub fn to_bounded(&self) -> Option<TimeInterval> {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => {
                Some(TimeInterval::with_flags(*left, *right, self.boundary_flags()))
            }
            _ => None,
        }
    }
}

impl From<NullableInterval<DateTime<Utc>>> for NullableTimeInterval {
    fn from(inner: NullableInterval<DateTime<Utc>>) -> Self {
        Self { inner }
    }
}

impl From<TimeInterval> for NullableTimeInterval {
    fn from(bounded: TimeInterval) -> Self {
        Self {
            inner: bounded.into_interval().into(),
        }
    }
}

impl fmt::Display for NullableTimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_layout(&TimeLayout::default()))
    }
}

impl FromStr for NullableTimeInterval {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for NullableTimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NullableTimeInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
