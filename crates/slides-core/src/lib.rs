//! Platform-independent core of the slideshow viewer.
//!
//! - [`SlideIndex`] - 1-based slide numbers and lenient path parsing
//! - [`Direction`] - navigation sense and its animation class
//! - [`LocationService`], [`SlideRoute`], [`MemoryLocation`] - addressing
//! - [`NavigationAddressBinding`] - slide numbers on top of a location
//! - [`SlideView`] - one mounted slide and its controls
//! - [`SlideshowState`] - the container that keys and animates slides
//!
//! Nothing here touches the DOM; the web front end plugs a browser-backed
//! [`LocationService`] and a view-level transition runner into these types.

mod binding;
mod direction;
pub mod error;
mod location;
mod slide;
mod slideshow;
mod view;

pub use binding::{NavigationAddressBinding, NavigationRequest};
pub use direction::Direction;
pub use error::{LocationError, SlideIndexError};
pub use location::{LocationService, MemoryLocation, SLIDES_PREFIX, SlideRoute, slide_path};
pub use slide::SlideIndex;
pub use slideshow::{SlideshowState, TransitionKey, TransitionRunner, TransitionSpec};
pub use view::{Control, ControlKind, SlideView};
