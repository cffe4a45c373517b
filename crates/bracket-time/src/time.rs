//! Time interval - an interval between two UTC timestamps

use std::fmt;
use std::str::FromStr;

use bracket_domain::{BoundaryFlags, Interval, NotationError};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::layout::TimeLayout;

/// An interval between two UTC timestamps
///
/// Text form uses a [`TimeLayout`]; `Display`, `FromStr` and serde use the
/// default RFC 3339 layout.
///
/// # Examples
///
/// ```
/// use bracket_time::{TimeInterval, TimeLayout};
///
/// let layout = TimeLayout::pattern("%Y-%m-%d").unwrap();
/// let september = TimeInterval::parse_with_layout("[2022-09-01, 2022-10-01)", &layout).unwrap();
/// assert_eq!(september.to_string(), "[2022-09-01T00:00:00Z,2022-10-01T00:00:00Z)");
/// assert_eq!(september.format_with_layout(&layout), "[2022-09-01,2022-10-01)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    inner: Interval<DateTime<Utc>>,
}

impl TimeInterval {
    /// Create a half-open interval `[left, right)`
    pub fn new(left: DateTime<Utc>, right: DateTime<Utc>) -> Self {
        Self::with_flags(left, right, BoundaryFlags::default())
    }

    /// Create an interval with explicit boundary flags
    pub fn with_flags(left: DateTime<Utc>, right: DateTime<Utc>, flags: BoundaryFlags) -> Self {
        Self {
            inner: Interval::with_flags(left, right, flags),
        }
    }

    /// Parse notation with RFC 3339 timestamps
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        Self::parse_with_layout(text, &TimeLayout::default())
    }

    /// Parse notation with timestamps in `layout`
    pub fn parse_with_layout(text: &str, layout: &TimeLayout) -> Result<Self, NotationError> {
        Interval::<DateTime<Utc>>::parse_with(text, layout).map(Self::from)
    }

    /// Left endpoint
    pub fn left(&self) -> &DateTime<Utc> {
        self.inner.left()
    }

    /// Right endpoint
    pub fn right(&self) -> &DateTime<Utc> {
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

    /// Check whether `time` lies in the interval
    pub fn contains(&self, time: &DateTime<Utc>) -> bool {
        self.inner.contains(time)
    }

    /// Render notation with timestamps in `layout`
    pub fn format_with_layout(&self, layout: &TimeLayout) -> String {
        self.inner.format_with(layout)
    }

    /// Underlying generic interval
    pub fn as_interval(&self) -> &Interval<DateTime<Utc>> {
        &self.inner
    }

    /// Unwrap into the generic interval
    pub fn into_interval(self) -> Interval<DateTime<Utc>> {
        self.inner
    }
}

impl From<Interval<DateTime<Utc>>> for TimeInterval {
    fn from(inner: Interval<DateTime<Utc>>) -> Self {
        Self { inner }
    }
}

impl From<TimeInterval> for Interval<DateTime<Utc>> {
    fn from(interval: TimeInterval) -> Self {
        interval.inner
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_layout(&TimeLayout::default()))
    }
}

impl FromStr for TimeInterval {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
