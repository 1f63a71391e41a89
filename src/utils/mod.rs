//! Utility modules for DOM access and logging.
//!
//! - [`dom`] - window, history and document helpers
//! - [`log`] - browser console logging

pub mod dom;
pub mod log;
