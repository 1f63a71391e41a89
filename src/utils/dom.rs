//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use slides_core::LocationError;
use web_sys::{History, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

fn history() -> Result<History, LocationError> {
    window()
        .ok_or(LocationError::NoWindow)?
        .history()
        .map_err(|_| LocationError::HistoryUnavailable)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL path (e.g. `/slides/3`).
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Set the URL path, adding a browser history entry.
pub fn push_path(path: &str) -> Result<(), LocationError> {
    history()?
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .map_err(|e| LocationError::StateChangeFailed(format!("{:?}", e)))
}

/// Replace the URL path without adding to browser history.
///
/// Used for redirects that shouldn't appear in back button history.
pub fn replace_path(path: &str) -> Result<(), LocationError> {
    history()?
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .map_err(|e| LocationError::StateChangeFailed(format!("{:?}", e)))
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
