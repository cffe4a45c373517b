//! Comparison abstraction for interval endpoints
//!
//! The interval core never uses `<` or `==` directly. Every endpoint type
//! supplies a three-way comparison through [`Comparable`]; built-in scalars
//! and chrono timestamps get an adapter over their native ordering.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Three-way comparison against another value of the same type
///
/// Returns `Less` if `self` sorts before `other`, `Equal` if they are the
/// same point and `Greater` if `self` sorts after. `None` means the two
/// values are unordered; only floating-point NaN produces it, and such a
/// value is never inside any interval.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use bracket_domain::{Comparable, Interval};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Version(u32, u32);
///
/// impl Comparable for Version {
///     fn compare(&self, other: &Self) -> Option<Ordering> {
///         Some((self.0, self.1).cmp(&(other.0, other.1)))
///     }
/// }
///
/// let supported = Interval::new(Version(1, 4), Version(2, 0));
/// assert!(supported.contains(&Version(1, 9)));
/// assert!(!supported.contains(&Version(2, 0)));
/// ```
pub trait Comparable {
    /// Compare `self` to `other`
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn compare(&self, other: &Self) -> Option<Ordering> {
        (**self).compare(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    fn compare(&self, other: &Self) -> Option<Ordering> {
        (**self).compare(&**other)
    }
}

/// Adapter for types with a total native order
macro_rules! native_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Option<Ordering> {
                    Some(Ord::cmp(self, other))
                }
            }
        )*
    };
}

/// Adapter for IEEE floats, whose native order is partial
macro_rules! native_partial_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Option<Ordering> {
                    PartialOrd::partial_cmp(self, other)
                }
            }
        )*
    };
}

native_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
native_ord!(bool, char, str, String);
native_ord!(NaiveDate, NaiveTime, NaiveDateTime);
native_partial_ord!(f32, f64);

impl<Tz: TimeZone> Comparable for DateTime<Tz> {
    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}
