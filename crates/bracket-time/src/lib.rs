//! Bracket Time
//!
//! Timestamp specializations of the Bracket interval model. Endpoints are
//! `chrono::DateTime<Utc>`; their text form follows a [`TimeLayout`], which
//! defaults to RFC 3339.
//!
//! ## Example
//!
//! ```
//! use bracket_time::NullableTimeInterval;
//! use chrono::{TimeZone, Utc};
//!
//! let until_october = NullableTimeInterval::parse("(NULL, 2022-10-01T00:00:00Z]").unwrap();
//! let last_day = Utc.with_ymd_and_hms(2022, 10, 1, 0, 0, 0).unwrap();
//! assert!(until_october.contains(Some(&last_day)));
//! assert!(!until_october.contains(None));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod layout;
pub mod nullable;
pub mod time;

// Re-exports for convenience
pub use config::TimeConfig;
pub use error::ConfigError;
pub use layout::TimeLayout;
pub use nullable::NullableTimeInterval;
pub use time::TimeInterval;
