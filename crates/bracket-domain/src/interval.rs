//! Interval module - the generic two-endpoint range

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::compare::Comparable;
use crate::error::NotationError;
use crate::flags::BoundaryFlags;
use crate::notation::{self, DisplayCodec, ValueCodec};

/// A range between `left` and `right`, each side open or closed
///
/// Intervals are immutable once built. Endpoint order is not validated: an
/// inverted interval such as `[5,1]` has no interior points, yet a query
/// equal to a closed endpoint still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    left: T,
    right: T,
    flags: BoundaryFlags,
}

impl<T> Interval<T> {
    /// Create a half-open interval `[left, right)`
    pub fn new(left: T, right: T) -> Self {
        Self::with_flags(left, right, BoundaryFlags::default())
    }

    /// Create an interval with explicit boundary flags
    pub fn with_flags(left: T, right: T, flags: BoundaryFlags) -> Self {
        Self { left, right, flags }
    }

    /// Left endpoint
    pub fn left(&self) -> &T {
        &self.left
    }

    /// Right endpoint
    pub fn right(&self) -> &T {
        &self.right
    }

    /// Boundary flags
    pub fn boundary_flags(&self) -> BoundaryFlags {
        self.flags
    }

    /// True if the left endpoint is part of the interval
    pub fn is_left_closed(&self) -> bool {
        self.flags.is_left_closed()
    }

    /// True if the right endpoint is part of the interval
    pub fn is_right_closed(&self) -> bool {
        self.flags.is_right_closed()
    }

    /// Take the endpoints and flags apart
    pub fn into_bounds(self) -> (T, T, BoundaryFlags) {
        (self.left, self.right, self.flags)
    }

    /// Convert both endpoints, keeping the flags
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Interval<U> {
        Interval::with_flags(f(self.left), f(self.right), self.flags)
    }

    /// Parse notation text with a custom value codec
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_domain::{Interval, NullableCodec, DisplayCodec};
    ///
    /// let open_ended: Interval<Option<u32>> =
    ///     Interval::parse_with("[10, null)", &NullableCodec(DisplayCodec)).unwrap();
    /// assert_eq!(open_ended.left(), &Some(10));
    /// assert_eq!(open_ended.right(), &None);
    /// ```
    pub fn parse_with<C>(text: &str, codec: &C) -> Result<Self, NotationError>
    where
        C: ValueCodec<T> + ?Sized,
    {
        notation::parse(text, codec)
    }

    /// Render notation text with a custom value codec
    pub fn format_with<C>(&self, codec: &C) -> String
    where
        C: ValueCodec<T> + ?Sized,
    {
        notation::render(self, codec)
    }
}

impl<T: Comparable> Interval<T> {
    /// Check whether `value` lies in the interval
    ///
    /// A value is inside when it is strictly between the endpoints, or equal
    /// to an endpoint whose side is closed. `[5,5]` holds exactly 5 and
    /// `(5,5)` holds nothing.
    pub fn contains(&self, value: &T) -> bool {
        let from_left = self.left.compare(value);
        let from_right = self.right.compare(value);

        (from_left == Some(Ordering::Less) && from_right == Some(Ordering::Greater))
            || (from_left == Some(Ordering::Equal) && self.is_left_closed())
            || (from_right == Some(Ordering::Equal) && self.is_right_closed())
    }
}

impl<T: Default> Default for Interval<T> {
    fn default() -> Self {
        Self::new(T::default(), T::default())
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            self.flags.left_marker(),
            self.left,
            self.right,
            self.flags.right_marker()
        )
    }
}

impl<T> FromStr for Interval<T>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse(s, &DisplayCodec)
    }
}

impl<T: fmt::Display> Serialize for Interval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IntervalVisitor(PhantomData))
    }
}

struct IntervalVisitor<T>(PhantomData<T>);

impl<T> Visitor<'_> for IntervalVisitor<T>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    type Value = Interval<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an interval string such as \"[a,b)\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let interval = Interval::new(1, 2);
        assert!(interval.is_left_closed());
        assert!(!interval.is_right_closed());
        assert_eq!(interval.boundary_flags(), BoundaryFlags::CLOSED_OPEN);
        assert!(interval.contains(&1));
        assert!(!interval.contains(&2));
        assert_eq!(interval.to_string(), "[1,2)");
    }

    #[test]
    fn test_accessors() {
        let interval = Interval::with_flags(-3i64, 8, BoundaryFlags::OPEN);
        assert_eq!(*interval.left(), -3);
        assert_eq!(*interval.right(), 8);
        assert_eq!(interval.into_bounds(), (-3, 8, BoundaryFlags::OPEN));
    }

    #[test]
    fn test_contains_interior_and_edges() {
        let closed = Interval::with_flags(0, 10, BoundaryFlags::CLOSED);
        assert!(closed.contains(&0));
        assert!(closed.contains(&5));
        assert!(closed.contains(&10));
        assert!(!closed.contains(&-1));
        assert!(!closed.contains(&11));

        let open = Interval::with_flags(0, 10, BoundaryFlags::OPEN);
        assert!(!open.contains(&0));
        assert!(open.contains(&5));
        assert!(!open.contains(&10));

        let open_closed = Interval::with_flags(0, 10, BoundaryFlags::OPEN_CLOSED);
        assert!(!open_closed.contains(&0));
        assert!(open_closed.contains(&10));
    }

    #[test]
    fn test_single_point() {
        assert!(Interval::with_flags(5, 5, BoundaryFlags::CLOSED).contains(&5));
        assert!(!Interval::with_flags(5, 5, BoundaryFlags::OPEN).contains(&5));
        assert!(Interval::with_flags(5, 5, BoundaryFlags::CLOSED_OPEN).contains(&5));
        assert!(!Interval::with_flags(5, 5, BoundaryFlags::CLOSED).contains(&4));
    }

    #[test]
    fn test_inverted_interval_is_not_validated() {
        let inverted = Interval::with_flags(10, 1, BoundaryFlags::CLOSED);
        assert!(!inverted.contains(&5));
        // Closed endpoints still match on equality
        assert!(inverted.contains(&10));
        assert!(inverted.contains(&1));

        let inverted_open = Interval::with_flags(10, 1, BoundaryFlags::OPEN);
        assert!(!inverted_open.contains(&10));
        assert!(!inverted_open.contains(&1));
    }

    #[test]
    fn test_float_nan_never_contained() {
        let everything = Interval::with_flags(f64::NEG_INFINITY, f64::INFINITY, BoundaryFlags::CLOSED);
        assert!(everything.contains(&0.0));
        assert!(everything.contains(&f64::INFINITY));
        assert!(!everything.contains(&f64::NAN));
    }

    #[test]
    fn test_string_interval() {
        let letters = Interval::with_flags("b".to_string(), "d".to_string(), BoundaryFlags::CLOSED);
        assert!(letters.contains(&"b".to_string()));
        assert!(letters.contains(&"cat".to_string()));
        assert!(!letters.contains(&"dog".to_string()));
        assert!(!letters.contains(&"a".to_string()));
    }

    #[test]
    fn test_parse_and_display() {
        let parsed: Interval<i64> = "(0,  20000)".parse().unwrap();
        assert_eq!(parsed, Interval::with_flags(0, 20000, BoundaryFlags::OPEN));
        assert_eq!(parsed.to_string(), "(0,20000)");
    }

    #[test]
    fn test_map() {
        let interval = Interval::with_flags(1, 2, BoundaryFlags::CLOSED).map(|v| v * 10);
        assert_eq!(interval, Interval::with_flags(10, 20, BoundaryFlags::CLOSED));
    }

    #[test]
    fn test_serde_as_notation() {
        let interval = Interval::with_flags(1i64, 5, BoundaryFlags::OPEN_CLOSED);
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, "\"(1,5]\"");

        let back: Interval<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);

        let bad: Result<Interval<i64>, _> = serde_json::from_str("\"[1)\"");
        assert!(bad.is_err());
    }
}
