//! Application configuration.
//!
//! Centralizes the compile-time constants used by the viewer. Slide bounds
//! live on [`slides_core::SlideIndex`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, shown in the document title.
pub const APP_NAME: &str = "slides";

/// Id of the element the app mounts into (see `index.html`).
pub const APP_ROOT_ID: &str = "app";

// =============================================================================
// Transition Configuration
// =============================================================================

/// How long an outgoing slide may animate before it is removed, in
/// milliseconds. Must match the animation durations in
/// `slideshow.module.css`.
pub const TRANSITION_TIMEOUT_MS: u32 = 500;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
