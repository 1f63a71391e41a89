//! Translation between the location service and slide numbers.

use crate::location::{LocationService, SlideRoute, slide_path};
use crate::slide::SlideIndex;
use crate::slideshow::TransitionKey;

/// A one-shot request to show another slide.
///
/// Consumed by [`NavigationAddressBinding::navigate_to`].
#[derive(Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: SlideIndex,
}

impl NavigationRequest {
    pub fn new(target: SlideIndex) -> Self {
        Self { target }
    }
}

/// Reads the current slide from a [`LocationService`] and requests new ones.
///
/// `Copy` whenever the location is, so reactive front ends can move it into
/// as many closures as they need.
#[derive(Debug, Clone, Copy)]
pub struct NavigationAddressBinding<L> {
    location: L,
}

impl<L: LocationService> NavigationAddressBinding<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// The underlying location service.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Current slide. Falls back to the first slide when the path has no
    /// usable number.
    pub fn current_index(&self) -> SlideIndex {
        SlideRoute::parse(&self.location.path())
            .index()
            .unwrap_or(SlideIndex::FIRST)
    }

    /// Identity of the current slide for the transition runner.
    pub fn transition_key(&self) -> TransitionKey {
        TransitionKey::for_index(self.current_index())
    }

    /// Push the requested slide. Bounds are not checked here.
    pub fn navigate_to(&self, request: NavigationRequest) {
        self.location.push(&slide_path(request.target));
    }

    /// Replace a root (`/`) location with the first slide.
    ///
    /// Returns `true` when a redirect was issued.
    pub fn redirect_root(&self) -> bool {
        if SlideRoute::parse(&self.location.path()) != SlideRoute::Root {
            return false;
        }
        self.location.replace(&slide_path(SlideIndex::FIRST));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;

    fn binding(path: &str) -> NavigationAddressBinding<MemoryLocation> {
        NavigationAddressBinding::new(MemoryLocation::new(path))
    }

    #[test]
    fn test_current_index() {
        assert_eq!(binding("/slides/7").current_index().get(), 7);
        assert_eq!(binding("/slides/250").current_index().get(), 250);
    }

    #[test]
    fn test_current_index_defaults() {
        for path in ["/", "", "/slides/abc", "/slides//", "/slides/0", "/slides/-2", "/nope"] {
            assert_eq!(binding(path).current_index(), SlideIndex::FIRST, "{path}");
        }
    }

    #[test]
    fn test_navigate_to_pushes_entry() {
        let binding = binding("/slides/4");
        binding.navigate_to(NavigationRequest::new(SlideIndex::new(5).unwrap()));

        assert_eq!(binding.location().path(), "/slides/5");
        assert_eq!(binding.location().len(), 2);
        assert_eq!(binding.current_index().get(), 5);
    }

    #[test]
    fn test_navigate_to_does_not_clamp() {
        let binding = binding("/slides/100");
        binding.navigate_to(NavigationRequest::new(SlideIndex::new(101).unwrap()));
        assert_eq!(binding.current_index().get(), 101);
    }

    #[test]
    fn test_redirect_root() {
        let binding = binding("/");
        assert!(binding.redirect_root());
        assert_eq!(binding.location().path(), "/slides/1");
        assert_eq!(binding.location().len(), 1);

        assert!(!binding.redirect_root());
    }

    #[test]
    fn test_transition_key_tracks_index() {
        assert_eq!(binding("/slides/abc").transition_key(), binding("/slides/1").transition_key());
        assert_eq!(binding("/slides/03").transition_key(), binding("/slides/3").transition_key());
        assert_ne!(binding("/slides/2").transition_key(), binding("/slides/3").transition_key());
    }
}
