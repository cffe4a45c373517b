//! Boundary flags - which sides of an interval are closed

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::error::NotationError;

/// Marker that opens a left-closed interval
pub const LEFT_CLOSED_MARKER: char = '[';
/// Marker that opens a left-open interval
pub const LEFT_OPEN_MARKER: char = '(';
/// Marker that ends a right-closed interval
pub const RIGHT_CLOSED_MARKER: char = ']';
/// Marker that ends a right-open interval
pub const RIGHT_OPEN_MARKER: char = ')';

/// Markers read as an open boundary, on either side
pub const OPEN_MARKERS: [char; 2] = [LEFT_OPEN_MARKER, RIGHT_OPEN_MARKER];
/// Markers read as a closed boundary, on either side
pub const CLOSED_MARKERS: [char; 2] = [LEFT_CLOSED_MARKER, RIGHT_CLOSED_MARKER];

/// Open/closed state of both sides of an interval, stored as two bits
///
/// - bit 0: right side closed
/// - bit 1: left side closed
///
/// No public constructor produces any other bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryFlags(u8);

impl BoundaryFlags {
    /// `(a,b)`: neither side closed
    pub const OPEN: Self = Self(0b00);

    /// `(a,b]`: only the right side closed
    pub const RIGHT_CLOSED: Self = Self(0b01);

    /// `[a,b)`: only the left side closed
    pub const LEFT_CLOSED: Self = Self(0b10);

    /// `[a,b]`: both sides closed
    pub const CLOSED: Self = Self(0b11);

    /// Alias of [`BoundaryFlags::RIGHT_CLOSED`]
    pub const OPEN_CLOSED: Self = Self::RIGHT_CLOSED;

    /// Alias of [`BoundaryFlags::LEFT_CLOSED`]
    pub const CLOSED_OPEN: Self = Self::LEFT_CLOSED;

    const MASK: u8 = 0b11;

    /// Build flags from raw bits, rejecting anything outside bits 0-1
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::MASK == 0).then_some(Self(bits))
    }

    /// Build flags from the closedness of each side
    pub fn from_sides(left_closed: bool, right_closed: bool) -> Self {
        let mut flags = Self::OPEN;
        if left_closed {
            flags |= Self::LEFT_CLOSED;
        }
        if right_closed {
            flags |= Self::RIGHT_CLOSED;
        }
        flags
    }

    /// Decode the marker characters found at both ends of a notation string
    ///
    /// Each side only checks whether its marker is in the open or the closed
    /// table; `"]"` on the left reads as closed just like `"["`.
    pub fn from_markers(left: char, right: char) -> Result<Self, NotationError> {
        Ok(Self::from_sides(
            marker_is_closed(left)?,
            marker_is_closed(right)?,
        ))
    }

    /// Raw bit value
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// True if the left endpoint belongs to the interval
    pub fn is_left_closed(&self) -> bool {
        self.0 & Self::LEFT_CLOSED.0 == Self::LEFT_CLOSED.0
    }

    /// True if the right endpoint belongs to the interval
    pub fn is_right_closed(&self) -> bool {
        self.0 & Self::RIGHT_CLOSED.0 == Self::RIGHT_CLOSED.0
    }

    /// Opening marker for these flags: `[` or `(`
    pub fn left_marker(&self) -> char {
        if self.is_left_closed() {
            LEFT_CLOSED_MARKER
        } else {
            LEFT_OPEN_MARKER
        }
    }

    /// Closing marker for these flags: `]` or `)`
    pub fn right_marker(&self) -> char {
        if self.is_right_closed() {
            RIGHT_CLOSED_MARKER
        } else {
            RIGHT_OPEN_MARKER
        }
    }
}

/// Look a marker up in the open/closed tables
fn marker_is_closed(marker: char) -> Result<bool, NotationError> {
    if OPEN_MARKERS.contains(&marker) {
        Ok(false)
    } else if CLOSED_MARKERS.contains(&marker) {
        Ok(true)
    } else {
        Err(NotationError::BoundaryFlag { marker })
    }
}

impl Default for BoundaryFlags {
    /// Half-open `[a,b)`
    fn default() -> Self {
        Self::CLOSED_OPEN
    }
}

impl BitOr for BoundaryFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoundaryFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BoundaryFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for BoundaryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::OPEN => "OPEN",
            Self::RIGHT_CLOSED => "RIGHT_CLOSED",
            Self::LEFT_CLOSED => "LEFT_CLOSED",
            _ => "CLOSED",
        };
        write!(f, "BoundaryFlags({})", name)
    }
}

impl fmt::Display for BoundaryFlags {
    /// Renders the marker pair, e.g. `[)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.left_marker(), self.right_marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_flags() {
        assert!(!BoundaryFlags::OPEN.is_left_closed());
        assert!(!BoundaryFlags::OPEN.is_right_closed());
        assert!(BoundaryFlags::CLOSED.is_left_closed());
        assert!(BoundaryFlags::CLOSED.is_right_closed());
        assert!(BoundaryFlags::CLOSED_OPEN.is_left_closed());
        assert!(!BoundaryFlags::CLOSED_OPEN.is_right_closed());
        assert!(!BoundaryFlags::OPEN_CLOSED.is_left_closed());
        assert!(BoundaryFlags::OPEN_CLOSED.is_right_closed());
    }

    #[test]
    fn test_default_is_half_open() {
        assert_eq!(BoundaryFlags::default(), BoundaryFlags::LEFT_CLOSED);
        assert_eq!(BoundaryFlags::default().to_string(), "[)");
    }

    #[test]
    fn test_bit_combination() {
        let flags = BoundaryFlags::LEFT_CLOSED | BoundaryFlags::RIGHT_CLOSED;
        assert_eq!(flags, BoundaryFlags::CLOSED);
        assert_eq!(flags.bits(), 3);
        assert_eq!(flags & BoundaryFlags::RIGHT_CLOSED, BoundaryFlags::RIGHT_CLOSED);
    }

    #[test]
    fn test_from_bits_rejects_extra_bits() {
        assert_eq!(BoundaryFlags::from_bits(2), Some(BoundaryFlags::LEFT_CLOSED));
        assert_eq!(BoundaryFlags::from_bits(4), None);
        assert_eq!(BoundaryFlags::from_bits(0xff), None);
    }

    #[test]
    fn test_from_markers() {
        assert_eq!(BoundaryFlags::from_markers('[', ']').unwrap(), BoundaryFlags::CLOSED);
        assert_eq!(BoundaryFlags::from_markers('(', ')').unwrap(), BoundaryFlags::OPEN);
        assert_eq!(BoundaryFlags::from_markers('[', ')').unwrap(), BoundaryFlags::CLOSED_OPEN);
        assert_eq!(BoundaryFlags::from_markers('(', ']').unwrap(), BoundaryFlags::OPEN_CLOSED);
        // Direction is not checked, only open/closed membership
        assert_eq!(BoundaryFlags::from_markers(']', '[').unwrap(), BoundaryFlags::CLOSED);
    }

    #[test]
    fn test_from_markers_unknown() {
        assert_eq!(
            BoundaryFlags::from_markers('{', ']'),
            Err(NotationError::BoundaryFlag { marker: '{' })
        );
        assert_eq!(
            BoundaryFlags::from_markers('[', '>'),
            Err(NotationError::BoundaryFlag { marker: '>' })
        );
    }

    #[test]
    fn test_markers() {
        assert_eq!(BoundaryFlags::OPEN.to_string(), "()");
        assert_eq!(BoundaryFlags::CLOSED.to_string(), "[]");
        assert_eq!(BoundaryFlags::OPEN_CLOSED.to_string(), "(]");
    }
}
