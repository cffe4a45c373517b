//! Bracket Domain Layer
//!
//! This crate contains the generic interval model for Bracket: a contiguous
//! range bounded by two endpoint values, each independently open or closed.
//! It has no I/O and defines the value types, the comparison seam and the
//! textual notation that every specialization builds upon.
//!
//! ## Key Concepts
//!
//! - **Boundary flags**: two bits recording whether each side is closed
//! - **Comparable**: the three-way comparison every endpoint type provides
//! - **Interval**: `left`, `right` and flags, with membership testing
//! - **Nullable interval**: endpoints that may be absent (unbounded sides)
//! - **Notation**: the `"[a,b)"` text form and the value codecs behind it
//!
//! ## Example
//!
//! ```
//! use bracket_domain::{Interval, BoundaryFlags};
//!
//! let range: Interval<i64> = "[1,2)".parse().unwrap();
//! assert_eq!(range.boundary_flags(), BoundaryFlags::default());
//! assert!(range.contains(&1));
//! assert!(!range.contains(&2));
//! assert_eq!(range.to_string(), "[1,2)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod flags;
pub mod interval;
pub mod notation;
pub mod nullable;
pub mod scalar;

// Re-exports for convenience
pub use compare::Comparable;
pub use error::NotationError;
pub use flags::BoundaryFlags;
pub use interval::Interval;
pub use notation::{DisplayCodec, NullableCodec, ValueCodec};
pub use nullable::NullableInterval;
pub use scalar::{FloatInterval, IntInterval, StrInterval, UintInterval};
