//! The slideshow container state machine.
//!
//! The container owns the agreed [`Direction`] and keeps exactly one
//! [`SlideView`] mounted, keyed by the current [`TransitionKey`]. When the
//! key changes the old view is dropped, a new one is seeded from the agreed
//! direction and the [`TransitionRunner`] is asked to animate the swap.

use std::fmt;

use crate::binding::NavigationAddressBinding;
use crate::direction::Direction;
use crate::location::{LocationService, slide_path};
use crate::slide::SlideIndex;
use crate::view::{ControlKind, SlideView};

// ============================================================================
// Transition contract
// ============================================================================

/// Identity of a mounted slide. Changes exactly when the slide number does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey(String);

impl TransitionKey {
    /// Key for a slide; the canonical path of that slide.
    pub fn for_index(index: SlideIndex) -> Self {
        Self(slide_path(index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a transition runner needs for one swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSpec {
    pub key: TransitionKey,
    /// Upper bound for the enter/exit animation before the old subtree is
    /// removed.
    pub timeout_ms: u32,
    pub direction: Direction,
}

impl TransitionSpec {
    pub fn direction_class(&self) -> &'static str {
        self.direction.class_name()
    }
}

/// Mount/unmount animation boundary.
///
/// Called once per new key with the view being mounted. Overlapping
/// transitions are the runner's business: a new [`TransitionSpec`] supersedes
/// whatever is still animating.
pub trait TransitionRunner {
    fn run(&mut self, spec: TransitionSpec, child: &SlideView);
}

// ============================================================================
// SlideshowState
// ============================================================================

#[derive(Debug, Clone)]
struct Mounted {
    key: TransitionKey,
    view: SlideView,
}

/// Canonical direction plus the currently mounted slide.
#[derive(Debug, Clone)]
pub struct SlideshowState {
    direction: Direction,
    timeout_ms: u32,
    mounted: Option<Mounted>,
}

impl SlideshowState {
    /// An empty container; nothing is mounted until the first render.
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            direction: Direction::default(),
            timeout_ms,
            mounted: None,
        }
    }

    /// The agreed direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change callback handed to the mounted view.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Transition for mounting under `key` with the agreed direction.
    pub fn mount(&self, key: TransitionKey) -> TransitionSpec {
        TransitionSpec {
            key,
            timeout_ms: self.timeout_ms,
            direction: self.direction,
        }
    }

    /// The mounted view, if any render has happened.
    pub fn current(&self) -> Option<&SlideView> {
        self.mounted.as_ref().map(|m| &m.view)
    }

    pub fn current_key(&self) -> Option<&TransitionKey> {
        self.mounted.as_ref().map(|m| &m.key)
    }

    /// Bring the mounted view in line with the location.
    ///
    /// At a stable location this returns the existing view untouched and
    /// does not call the runner. When the slide changed, a fresh view is
    /// seeded with the agreed direction and the runner is invoked once.
    pub fn render<L, R>(
        &mut self,
        binding: &NavigationAddressBinding<L>,
        runner: &mut R,
    ) -> &SlideView
    where
        L: LocationService,
        R: TransitionRunner + ?Sized,
    {
        let index = binding.current_index();
        let key = TransitionKey::for_index(index);

        let mounted = match self.mounted.take() {
            Some(mounted) if mounted.key == key => mounted,
            _ => {
                let view = SlideView::new(index, self.direction);
                runner.run(self.mount(key.clone()), &view);
                Mounted { key, view }
            }
        };

        &self.mounted.insert(mounted).view
    }

    /// Activate a control on the mounted view, with [`set_direction`] as
    /// its change callback.
    ///
    /// Returns `None` when nothing is mounted or the control is disabled.
    ///
    /// [`set_direction`]: SlideshowState::set_direction
    pub fn activate<L: LocationService>(
        &mut self,
        kind: ControlKind,
        binding: &NavigationAddressBinding<L>,
    ) -> Option<Direction> {
        let mounted = self.mounted.as_mut()?;
        let direction = &mut self.direction;
        mounted.view.activate(kind, |d| *direction = d, binding)
    }
}
