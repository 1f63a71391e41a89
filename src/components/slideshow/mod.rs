//! Slideshow UI.
//!
//! - [`Slideshow`] - container owning the agreed direction
//! - [`Slide`] - one slide with its previous/next controls
//! - [`stage`] - transition runner animating slide swaps

mod container;
mod slide;
pub mod stage;

pub use container::Slideshow;
pub use slide::Slide;
