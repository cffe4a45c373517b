//! Intervals whose endpoints may be absent
//!
//! An absent endpoint is an unbounded side: `(NULL, 5]` holds everything up
//! to and including 5. Absent endpoints render as `NULL`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::compare::Comparable;
use crate::error::NotationError;
use crate::flags::BoundaryFlags;
use crate::interval::Interval;
use crate::notation::{DisplayCodec, NullableCodec, ValueCodec, NULL_TOKEN};

/// An interval with optional endpoints
///
/// Containment by endpoint presence:
///
/// | left | right | rule |
/// |---|---|---|
/// | set | set | same as [`Interval::contains`] |
/// | absent | absent | never contains anything |
/// | absent | set | `v < right`, or `v == right` when right-closed |
/// | set | absent | `v > left`, or `v == left` when left-closed |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullableInterval<T> {
    inner: Interval<Option<T>>,
}

impl<T> NullableInterval<T> {
    /// Create a half-open interval `[left, right)`
    pub fn new(left: Option<T>, right: Option<T>) -> Self {
        Self::with_flags(left, right, BoundaryFlags::default())
    }

    /// Create an interval with explicit boundary flags
    pub fn with_flags(left: Option<T>, right: Option<T>, flags: BoundaryFlags) -> Self {
        Self {
            inner: Interval::with_flags(left, right, flags),
        }
    }

    /// Left endpoint, `None` when unbounded
    pub fn left(&self) -> Option<&T> {
        self.inner.left().as_ref()
    }

    /// Right endpoint, `None` when unbounded
    pub fn right(&self) -> Option<&T> {
        self.inner.right().as_ref()
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

    /// Underlying interval over optional endpoints
    pub fn as_interval(&self) -> &Interval<Option<T>> {
        &self.inner
    }

    /// Take the endpoints and flags apart
    pub fn into_bounds(self) -> (Option<T>, Option<T>, BoundaryFlags) {
        self.inner.into_bounds()
    }

    /// Parse notation text, using `codec` for the present values
    pub fn parse_with<C>(text: &str, codec: &C) -> Result<Self, NotationError>
    where
        C: ValueCodec<T>,
    {
        Interval::<Option<T>>::parse_with(text, &NullableCodec(codec)).map(|inner| Self { inner })
    }

    /// Render notation text, using `codec` for the present values
    pub fn format_with<C>(&self, codec: &C) -> String
    where
        C: ValueCodec<T>,
    {
        self.inner.format_with(&NullableCodec(codec))
    }
}

impl<T: Comparable> NullableInterval<T> {
    /// Check whether `value` lies in the interval
    ///
    /// An absent query value is never contained.
    pub fn contains(&self, value: Option<&T>) -> bool {
        match value {
            Some(v) => self.contains_value(v),
            None => false,
        }
    }

    /// Check whether a present value lies in the interval
    pub fn contains_value(&self, value: &T) -> bool {
        let is = |bound: &T, want: Ordering| bound.compare(value) == Some(want);

        match (self.left(), self.right()) {
            (Some(left), Some(right)) => {
                (is(left, Ordering::Less) && is(right, Ordering::Greater))
                    || (is(left, Ordering::Equal) && self.is_left_closed())
                    || (is(right, Ordering::Equal) && self.is_right_closed())
            }
            (None, None) => false,
            (None, Some(right)) => {
                is(right, Ordering::Greater) || (is(right, Ordering::Equal) && self.is_right_closed())
            }
            (Some(left), None) => {
                is(left, Ordering::Less) || (is(left, Ordering::Equal) && self.is_left_closed())
            }
        }
    }
}

impl<T> From<Interval<Option<T>>> for NullableInterval<T> {
    fn from(inner: Interval<Option<T>>) -> Self {
        Self { inner }
    }
}

impl<T> From<Interval<T>> for NullableInterval<T> {
    fn from(bounded: Interval<T>) -> Self {
        Self {
            inner: bounded.map(Some),
        }
    }
}

// Manual impl: a derive would require `T: Default`
impl<T> Default for NullableInterval<T> {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl<T: fmt::Display> fmt::Display for NullableInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self.boundary_flags();
        write!(f, "{}", flags.left_marker())?;
        write_endpoint(f, self.left())?;
        f.write_str(",")?;
        write_endpoint(f, self.right())?;
        write!(f, "{}", flags.right_marker())
    }
}

fn write_endpoint<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<&T>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{}", v),
        None => f.write_str(NULL_TOKEN),
    }
}

impl<T> FromStr for NullableInterval<T>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &DisplayCodec)
    }
}
