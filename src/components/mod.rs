//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`slideshow`] - Slideshow container, slides and transitions
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod router;
pub mod slideshow;

pub use router::AppRouter;
