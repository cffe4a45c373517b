//! Scalar specializations: integers, floats and strings
//!
//! These are plain [`Interval`] instantiations whose values use the type's
//! standard text form. Floats accept `inf`, `Inf`, `+Inf`, `-Inf` and
//! `infinity` in any case.

use crate::error::NotationError;
use crate::interval::Interval;

/// Interval over signed 64-bit integers
pub type IntInterval = Interval<i64>;

/// Interval over unsigned 64-bit integers
pub type UintInterval = Interval<u64>;

/// Interval over 64-bit floats
pub type FloatInterval = Interval<f64>;

/// Interval over strings, compared lexicographically by bytes
pub type StrInterval = Interval<String>;

/// Parse an integer interval such as `[1, 20000)`
pub fn parse_int_interval(text: &str) -> Result<IntInterval, NotationError> {
    text.parse()
}

/// Parse an unsigned integer interval such as `[0,255]`
pub fn parse_uint_interval(text: &str) -> Result<UintInterval, NotationError> {
    text.parse()
}

/// Parse a float interval such as `(-Inf, +Inf)`
pub fn parse_float_interval(text: &str) -> Result<FloatInterval, NotationError> {
    text.parse()
}

/// Parse a string interval such as `[apple,banana)`
///
/// Values are taken verbatim after trimming and never fail to parse.
pub fn parse_str_interval(text: &str) -> Result<StrInterval, NotationError> {
    text.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::BoundaryFlags;

    #[test]
    fn test_parse_int_interval() {
        let cases = [
            ("[1,2]", Interval::with_flags(1, 2, BoundaryFlags::CLOSED)),
            ("[1,2)", Interval::with_flags(1, 2, BoundaryFlags::CLOSED_OPEN)),
            ("[1,  20000)", Interval::with_flags(1, 20000, BoundaryFlags::CLOSED_OPEN)),
            ("(0,  20000)", Interval::with_flags(0, 20000, BoundaryFlags::OPEN)),
            ("(-1,  20000)", Interval::with_flags(-1, 20000, BoundaryFlags::OPEN)),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_int_interval(text).unwrap(), expected, "input {}", text);
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(
            parse_int_interval("[1,  20000)").unwrap(),
            parse_int_interval("[1,20000)").unwrap()
        );
    }

    #[test]
    fn test_half_open_membership() {
        let interval = parse_int_interval("[1,2)").unwrap();
        assert!(interval.is_left_closed());
        assert!(!interval.is_right_closed());
        assert!(interval.contains(&1));
        assert!(!interval.contains(&2));
    }

    #[test]
    fn test_int_errors() {
        assert_eq!(parse_int_interval("[1)"), Err(NotationError::TooShort { len: 3 }));
        assert_eq!(parse_int_interval("[1;2)"), Err(NotationError::ValueFormat { parts: 1 }));
        assert!(matches!(
            parse_int_interval("[1.5,2)"),
            Err(NotationError::ValueParse { .. })
        ));
        assert!(matches!(
            parse_int_interval("<1,2)"),
            Err(NotationError::BoundaryFlag { marker: '<' })
        ));
    }

    #[test]
    fn test_parse_uint_interval() {
        assert_eq!(
            parse_uint_interval("[0, 255]").unwrap(),
            Interval::with_flags(0, 255, BoundaryFlags::CLOSED)
        );
        assert!(parse_uint_interval("[-1,2)").is_err());
    }

    #[test]
    fn test_parse_float_interval() {
        let cases = [
            ("[1.1,2.0]", Interval::with_flags(1.1, 2.0, BoundaryFlags::CLOSED)),
            ("[1.1,2)", Interval::with_flags(1.1, 2.0, BoundaryFlags::CLOSED_OPEN)),
            ("[1.001,  20000)", Interval::with_flags(1.001, 20000.0, BoundaryFlags::CLOSED_OPEN)),
            ("(0.001,  20000)", Interval::with_flags(0.001, 20000.0, BoundaryFlags::OPEN)),
            ("(-0.1,  Inf)", Interval::with_flags(-0.1, f64::INFINITY, BoundaryFlags::OPEN)),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_float_interval(text).unwrap(), expected, "input {}", text);
        }
    }

    #[test]
    fn test_float_infinities() {
        let everything = parse_float_interval("(-Inf,+Inf)").unwrap();
        assert_eq!(*everything.left(), f64::NEG_INFINITY);
        assert_eq!(*everything.right(), f64::INFINITY);
        assert!(everything.contains(&0.0));
        assert!(!everything.contains(&f64::INFINITY));

        let spaced = parse_float_interval("(-Inf,  +Inf)").unwrap();
        assert_eq!(spaced, everything);
        // Rendered with Rust's spelling, which parses back
        assert_eq!(everything.to_string(), "(-inf,inf)");
        assert_eq!(parse_float_interval(&everything.to_string()).unwrap(), everything);
    }

    #[test]
    fn test_parse_str_interval() {
        let interval = parse_str_interval("[ apple , banana )").unwrap();
        assert_eq!(interval.left(), "apple");
        assert_eq!(interval.right(), "banana");
        assert!(interval.contains(&"apricot".to_string()));
        assert!(!interval.contains(&"banana".to_string()));
        assert_eq!(interval.to_string(), "[apple,banana)");
    }
}
