//! Navigation direction and its animation class contract.

use std::fmt;

use crate::slide::SlideIndex;

/// Which way the slideshow is moving.
///
/// The direction is rendered as a CSS class on the slide root so the
/// stylesheet can pick the matching enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Toward higher slide numbers.
    #[default]
    Forward,
    /// Toward lower slide numbers.
    Backward,
}

impl Direction {
    /// Direction of a move from `current` to `target`.
    ///
    /// Anything that is not strictly forward counts as backward, including
    /// a move onto the current slide.
    pub fn between(current: SlideIndex, target: SlideIndex) -> Self {
        if target > current {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Class name applied to the animated slide root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Forward => "left",
            Self::Backward => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(n: u32) -> SlideIndex {
        SlideIndex::new(n).unwrap()
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between(idx(1), idx(2)), Direction::Forward);
        assert_eq!(Direction::between(idx(5), idx(4)), Direction::Backward);
        assert_eq!(Direction::between(idx(3), idx(3)), Direction::Backward);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Direction::Forward.class_name(), "left");
        assert_eq!(Direction::Backward.class_name(), "right");
    }

    #[test]
    fn test_default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
