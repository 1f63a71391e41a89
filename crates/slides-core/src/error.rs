//! Error types for the slideshow core.
//!
//! - [`SlideIndexError`] - a path segment that is not a usable slide number
//! - [`LocationError`] - failures reported by a location service backend
//!
//! Neither escapes the navigation layer: malformed indices fall back to the
//! first slide and location failures are logged by the backend that hit them.

use thiserror::Error;

/// Reasons a path segment cannot be read as a [`SlideIndex`](crate::SlideIndex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideIndexError {
    /// The segment was empty or missing.
    #[error("slide number is empty")]
    Empty,
    /// The segment does not start with a decimal integer.
    #[error("slide number is not a number: {0:?}")]
    NotANumber(String),
    /// The number is zero or negative.
    #[error("slide number out of range: {0}")]
    OutOfRange(i64),
}

/// Failures while reading or changing the browser address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// `window.history` could not be obtained
    #[error("history API not available")]
    HistoryUnavailable,
    /// `pushState` / `replaceState` threw
    #[error("failed to change location: {0}")]
    StateChangeFailed(String),
}
