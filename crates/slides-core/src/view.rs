//! State of a single mounted slide.
//!
//! A [`SlideView`] is created once per slide visit. It snapshots the
//! container's direction at construction and from then on only changes it
//! through its own controls, so a view that is animating out keeps the class
//! it was given when the user left it.

use crate::binding::{NavigationAddressBinding, NavigationRequest};
use crate::direction::Direction;
use crate::location::LocationService;
use crate::slide::SlideIndex;

/// The two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Previous,
    Next,
}

impl ControlKind {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }
}

/// Render state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    /// Slide the control leads to, `None` when there is no such slide.
    pub target: Option<SlideIndex>,
    pub disabled: bool,
}

/// One slide's controls, content and animation class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    index: SlideIndex,
    display_direction: Direction,
}

impl SlideView {
    /// A view of `index` seeded with `direction`.
    pub fn new(index: SlideIndex, direction: Direction) -> Self {
        Self {
            index,
            display_direction: direction,
        }
    }

    /// A view of whatever slide the binding currently points at.
    pub fn mount<L: LocationService>(
        binding: &NavigationAddressBinding<L>,
        direction: Direction,
    ) -> Self {
        Self::new(binding.current_index(), direction)
    }

    pub fn index(&self) -> SlideIndex {
        self.index
    }

    /// Direction this instance animates with.
    pub fn display_direction(&self) -> Direction {
        self.display_direction
    }

    /// Class for the animated root element.
    pub fn class_name(&self) -> &'static str {
        self.display_direction.class_name()
    }

    /// Text shown in the content area.
    pub fn content_label(&self) -> String {
        format!("Slide #{}", self.index)
    }

    pub fn control(&self, kind: ControlKind) -> Control {
        match kind {
            ControlKind::Previous => Control {
                kind,
                target: self.index.previous(),
                disabled: self.index.is_first(),
            },
            ControlKind::Next => Control {
                kind,
                target: self.index.next(),
                disabled: self.index.is_last(),
            },
        }
    }

    pub fn previous(&self) -> Control {
        self.control(ControlKind::Previous)
    }

    pub fn next(&self) -> Control {
        self.control(ControlKind::Next)
    }

    /// Handle a click on `kind`.
    ///
    /// For an enabled control this computes the new direction, reports it
    /// through `on_change`, adopts it locally and then requests navigation,
    /// in that order. Disabled controls are ignored and return `None`.
    pub fn activate<L, F>(
        &mut self,
        kind: ControlKind,
        on_change: F,
        binding: &NavigationAddressBinding<L>,
    ) -> Option<Direction>
    where
        L: LocationService,
        F: FnOnce(Direction),
    {
        let control = self.control(kind);
        if control.disabled {
            return None;
        }
        let target = control.target?;

        let direction = Direction::between(self.index, target);
        on_change(direction);
        self.display_direction = direction;
        binding.navigate_to(NavigationRequest::new(target));

        Some(direction)
    }
}
