//! Browser-backed location service.

use leptos::prelude::*;
use slides_core::LocationService;

use crate::utils::{dom, log};

/// [`LocationService`] over `window.location` and the History API.
///
/// The path is mirrored into a signal so that anything reading it through
/// [`LocationService::path`] re-runs on navigation. `pushState` and
/// `replaceState` do not fire `popstate`, so the mirror is updated here;
/// back/forward navigation calls [`BrowserLocation::sync`].
#[derive(Clone, Copy)]
pub struct BrowserLocation {
    path: RwSignal<String>,
}

impl BrowserLocation {
    /// Creates a location mirroring the current browser path.
    pub fn new() -> Self {
        Self::with_path(dom::pathname())
    }

    fn with_path(path: String) -> Self {
        Self {
            path: RwSignal::new(path),
        }
    }

    /// Re-read the browser path after a history traversal.
    pub fn sync(&self) {
        self.path.set(dom::pathname());
    }
}

impl Default for BrowserLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationService for BrowserLocation {
    fn path(&self) -> String {
        self.path.get()
    }

    fn push(&self, path: &str) {
        match dom::push_path(path) {
            Ok(()) => self.path.set(path.to_string()),
            Err(e) => log::warn(&format!("navigation to {} failed: {}", path, e)),
        }
    }

    fn replace(&self, path: &str) {
        match dom::replace_path(path) {
            Ok(()) => self.path.set(path.to_string()),
            Err(e) => log::warn(&format!("redirect to {} failed: {}", path, e)),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use slides_core::{ControlKind, Direction, NavigationAddressBinding, SlideView};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_push_updates_browser_and_signal() {
        let location = BrowserLocation::new();
        location.push("/slides/7");

        assert_eq!(dom::pathname(), "/slides/7");
        assert_eq!(location.path(), "/slides/7");
    }

    #[wasm_bindgen_test]
    fn test_replace_redirects_root() {
        let location = BrowserLocation::new();
        location.replace("/");
        let binding = NavigationAddressBinding::new(location);

        assert!(binding.redirect_root());
        assert_eq!(dom::pathname(), "/slides/1");
        assert_eq!(binding.current_index().get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_activation_moves_browser_location() {
        let location = BrowserLocation::new();
        location.push("/slides/3");
        let binding = NavigationAddressBinding::new(location);
        let mut view = SlideView::mount(&binding, Direction::Forward);

        let direction = view.activate(ControlKind::Previous, |_| {}, &binding);

        assert_eq!(direction, Some(Direction::Backward));
        assert_eq!(dom::pathname(), "/slides/2");
    }

    #[wasm_bindgen_test]
    fn test_sync_reads_browser_path() {
        let location = BrowserLocation::new();
        dom::push_path("/slides/42").unwrap();
        assert_ne!(location.path(), "/slides/42");

        location.sync();
        assert_eq!(location.path(), "/slides/42");
    }
}
