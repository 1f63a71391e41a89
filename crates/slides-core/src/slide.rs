//! Slide numbering.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::SlideIndexError;

// ============================================================================
// SlideIndex
// ============================================================================

/// 1-based slide number.
///
/// Zero and negative numbers are unrepresentable. The UI range is
/// [`SlideIndex::FIRST`]..=[`SlideIndex::LAST`]; larger values can still be
/// reached by editing the address and are carried through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(NonZeroU32);

impl SlideIndex {
    /// The first slide. Also the fallback for anything unparseable.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// The last slide reachable through the previous/next controls.
    pub const LAST: Self = match NonZeroU32::new(100) {
        Some(n) => Self(n),
        None => panic!("last slide must be non-zero"),
    };

    /// Creates an index, returning `None` for zero.
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    /// The plain slide number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Reads a path segment, falling back to the first slide.
    ///
    /// Missing, empty, non-numeric, zero and negative segments all yield
    /// [`SlideIndex::FIRST`].
    pub fn from_segment(segment: Option<&str>) -> Self {
        segment
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::FIRST)
    }

    /// The following slide, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// The preceding slide, or `None` on the first slide.
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// `true` at or beyond the last slide the controls can reach.
    pub fn is_last(self) -> bool {
        self >= Self::LAST
    }
}

impl Default for SlideIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for SlideIndex {
    type Error = SlideIndexError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u32::try_from(n)
            .ok()
            .and_then(Self::new)
            .ok_or(SlideIndexError::OutOfRange(n))
    }
}

/// Lenient integer parsing for address segments.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of ASCII digits is read and anything after it ignored, so `"12abc"`
/// is slide 12 and `"-3"` is rejected as out of range.
impl FromStr for SlideIndex {
    type Err = SlideIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        if trimmed.is_empty() {
            return Err(SlideIndexError::Empty);
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = unsigned
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let magnitude: i64 = unsigned[..digits_len]
            .parse()
            .map_err(|_| SlideIndexError::NotANumber(s.to_string()))?;

        Self::try_from(if negative { -magnitude } else { magnitude })
    }
}
