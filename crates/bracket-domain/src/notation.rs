//! Textual interval notation
//!
//! The notation is `{marker}{value},{value}{marker}`, for example `[1,2)` or
//! `(NULL, 2022-10-01T00:00:00Z]`. Markers map to boundary flags, the two
//! values are trimmed and handed to a [`ValueCodec`] for the endpoint type.
//!
//! The separator is never escaped, so values containing a literal comma
//! cannot be represented.

use std::fmt::Display;
use std::str::FromStr;

use tracing::trace;

use crate::error::{NotationError, MIN_NOTATION_LEN};
use crate::flags::BoundaryFlags;
use crate::interval::Interval;

/// Separator between the two endpoint values
pub const SEPARATOR: char = ',';

/// Token standing for an absent (unbounded) endpoint
pub const NULL_TOKEN: &str = "NULL";

/// Type-specific parser and formatter for endpoint values
pub trait ValueCodec<T> {
    /// Parse one trimmed endpoint value
    ///
    /// The error string becomes the `reason` of
    /// [`NotationError::ValueParse`].
    fn parse_value(&self, text: &str) -> Result<T, String>;

    /// Render one endpoint value
    fn format_value(&self, value: &T) -> String;
}

impl<T, C: ValueCodec<T> + ?Sized> ValueCodec<T> for &C {
    fn parse_value(&self, text: &str) -> Result<T, String> {
        (**self).parse_value(text)
    }

    fn format_value(&self, value: &T) -> String {
        (**self).format_value(value)
    }
}

/// Codec using the type's own `FromStr` and `Display`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayCodec;

impl<T> ValueCodec<T> for DisplayCodec
where
    T: FromStr + Display,
    T::Err: Display,
{
    fn parse_value(&self, text: &str) -> Result<T, String> {
        text.parse::<T>().map_err(|e| e.to_string())
    }

    fn format_value(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Codec for optional values: `NULL` (any case) stands for `None`
///
/// Present values go through the wrapped codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullableCodec<C>(pub C);

impl<T, C: ValueCodec<T>> ValueCodec<Option<T>> for NullableCodec<C> {
    fn parse_value(&self, text: &str) -> Result<Option<T>, String> {
        if text.eq_ignore_ascii_case(NULL_TOKEN) {
            return Ok(None);
        }
        self.0.parse_value(text).map(Some)
    }

    fn format_value(&self, value: &Option<T>) -> String {
        match value {
            Some(v) => self.0.format_value(v),
            None => NULL_TOKEN.to_string(),
        }
    }
}

/// Notation split into its parts, before value parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawNotation<'a> {
    /// Flags decoded from the two markers
    pub flags: BoundaryFlags,
    /// Trimmed left value text
    pub left: &'a str,
    /// Trimmed right value text
    pub right: &'a str,
}

/// Split notation text into flags and trimmed value strings
///
/// Checks, in order: minimum length, part count, then markers.
pub fn split(text: &str) -> Result<RawNotation<'_>, NotationError> {
    if text.len() < MIN_NOTATION_LEN {
        trace!(input = text, "Interval notation too short");
        return Err(NotationError::TooShort { len: text.len() });
    }

    let mut chars = text.chars();
    // Length check above guarantees both ends exist
    let (Some(left_marker), Some(right_marker)) = (chars.next(), chars.next_back()) else {
        return Err(NotationError::TooShort { len: text.len() });
    };
    let body = chars.as_str();

    let mut values = body.split(SEPARATOR);
    let (Some(left), Some(right), None) = (values.next(), values.next(), values.next()) else {
        let parts = body.split(SEPARATOR).count();
        trace!(input = text, parts, "Interval notation has wrong part count");
        return Err(NotationError::ValueFormat { parts });
    };

    let flags = BoundaryFlags::from_markers(left_marker, right_marker).inspect_err(|e| {
        trace!(input = text, error = %e, "Interval notation has bad marker");
    })?;

    Ok(RawNotation {
        flags,
        left: left.trim(),
        right: right.trim(),
    })
}

/// Parse notation text into an interval using `codec` for the values
pub fn parse<T, C>(text: &str, codec: &C) -> Result<Interval<T>, NotationError>
where
    C: ValueCodec<T> + ?Sized,
{
    let raw = split(text)?;
    let left = parse_endpoint(codec, raw.left)?;
    let right = parse_endpoint(codec, raw.right)?;
    Ok(Interval::with_flags(left, right, raw.flags))
}

fn parse_endpoint<T, C>(codec: &C, value: &str) -> Result<T, NotationError>
where
    C: ValueCodec<T> + ?Sized,
{
    codec.parse_value(value).map_err(|reason| {
        trace!(value, reason = %reason, "Interval value rejected");
        NotationError::value_parse(value, reason)
    })
}

/// Render an interval using `codec` for the values
pub fn render<T, C>(interval: &Interval<T>, codec: &C) -> String
where
    C: ValueCodec<T> + ?Sized,
{
    render_parts(
        interval.boundary_flags(),
        &codec.format_value(interval.left()),
        &codec.format_value(interval.right()),
    )
}

/// Assemble notation from flags and already-rendered values
pub fn render_parts(flags: BoundaryFlags, left: &str, right: &str) -> String {
    let mut out = String::with_capacity(left.len() + right.len() + 3);
    out.push(flags.left_marker());
    out.push_str(left);
    out.push(SEPARATOR);
    out.push_str(right);
    out.push(flags.right_marker());
    out
}
