//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{LuChevronLeft as Previous, LuChevronRight as Next, LuHouse as Home};
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as Previous, BsChevronRight as Next, BsHouseFill as Home,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PREVIOUS, Previous);
themed_icon!(NEXT, Next);
themed_icon!(HOME, Home);
