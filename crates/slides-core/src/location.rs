//! Address handling.
//!
//! - [`LocationService`] - read the current path, request a new one
//! - [`SlideRoute`] - the path grammar (`/`, `/slides/{index}`)
//! - [`MemoryLocation`] - in-memory history used off the browser

use std::cell::RefCell;
use std::rc::Rc;

use crate::slide::SlideIndex;

/// Path prefix shared by every slide.
pub const SLIDES_PREFIX: &str = "/slides/";

/// Canonical path for a slide.
pub fn slide_path(index: SlideIndex) -> String {
    format!("{}{}", SLIDES_PREFIX, index)
}

// ============================================================================
// LocationService
// ============================================================================

/// An addressable history the slideshow reads its position from.
///
/// Implementations report failures themselves; the navigation layer treats
/// every request as fire-and-forget.
pub trait LocationService {
    /// Current path, e.g. `/slides/3`.
    fn path(&self) -> String;

    /// Navigate to `path`, adding a history entry.
    fn push(&self, path: &str);

    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}

// ============================================================================
// SlideRoute
// ============================================================================

/// Routes the viewer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideRoute {
    /// `/` or an empty path. Redirects to the first slide.
    Root,
    /// `/slides/{segment}`. The segment is kept raw; parsing is lenient.
    Slide { segment: String },
    /// Anything else.
    NotFound,
}

impl SlideRoute {
    /// Parse a location path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            return Self::Root;
        }

        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match trimmed.strip_prefix(SLIDES_PREFIX) {
            Some(segment) if !segment.contains('/') => Self::Slide {
                segment: segment.to_string(),
            },
            _ => Self::NotFound,
        }
    }

    /// Slide index for this route, `None` unless it is a slide route.
    pub fn index(&self) -> Option<SlideIndex> {
        match self {
            Self::Slide { segment } => Some(SlideIndex::from_segment(Some(segment))),
            Self::Root | Self::NotFound => None,
        }
    }

    pub fn is_slide(&self) -> bool {
        matches!(self, Self::Slide { .. })
    }
}

// ============================================================================
// MemoryLocation
// ============================================================================

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

/// In-memory history stack with browser-like push/replace/back/forward.
///
/// Clones share the same stack, so a clone handed to a binding observes
/// navigation performed through any other clone.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    history: Rc<RefCell<History>>,
}

impl MemoryLocation {
    /// Creates a history with a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Rc::new(RefCell::new(History {
                entries: vec![initial.into()],
                cursor: 0,
            })),
        }
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.history.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step back one entry. Returns `false` at the oldest entry.
    pub fn back(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.cursor == 0 {
            return false;
        }
        history.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.cursor + 1 >= history.entries.len() {
            return false;
        }
        history.cursor += 1;
        true
    }
}

impl LocationService for MemoryLocation {
    fn path(&self) -> String {
        let history = self.history.borrow();
        history.entries[history.cursor].clone()
    }

    fn push(&self, path: &str) {
        let mut history = self.history.borrow_mut();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(path.to_string());
        history.cursor = keep;
    }

    fn replace(&self, path: &str) {
        let mut history = self.history.borrow_mut();
        let cursor = history.cursor;
        history.entries[cursor] = path.to_string();
    }
}
