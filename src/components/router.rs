//! Application router component.
//!
//! Handles path-based routing over the History API.
//!
//! # Architecture
//!
//! - **URL path is the source of truth**: the slide is derived from `/slides/{n}`
//! - **`/` redirects**: replaced (not pushed) with `/slides/1`
//! - **Slideshow never re-renders on navigation**: it stays mounted across slides
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
use leptos_icons::Icon;
use slides_core::{
    LocationService, NavigationAddressBinding, NavigationRequest, SlideIndex, SlideRoute,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::icons as ic;
use crate::components::slideshow::Slideshow;
use crate::location::BrowserLocation;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/slideshow/slideshow.module.css");

/// Replace `/` with the first slide, logging when it happens.
fn redirect_root(binding: &NavigationAddressBinding<BrowserLocation>) {
    if binding.redirect_root() {
        log::debug("redirected / to the first slide");
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Routes:
/// - `/` → redirect to `/slides/1`
/// - `/slides/{n}` → slideshow
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let location = BrowserLocation::new();
    let binding = NavigationAddressBinding::new(location);

    redirect_root(&binding);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            location.sync();
            redirect_root(&binding);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Only flips between slide and non-slide routes, so moving between
    // slides keeps the same Slideshow instance.
    let is_slide = Memo::new(move |_| SlideRoute::parse(&location.path()).is_slide());

    view! {
        <Show
            when=move || is_slide.get()
            fallback=move || view! { <NotFound binding=binding /> }
        >
            <Slideshow binding=binding />
        </Show>
    }
}

// ============================================================================
// Not Found
// ============================================================================

/// Shown for paths outside `/slides/{n}`.
#[component]
fn NotFound(binding: NavigationAddressBinding<BrowserLocation>) -> impl IntoView {
    let go_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        binding.navigate_to(NavigationRequest::new(SlideIndex::FIRST));
    };

    view! {
        <div class=css::notFound>
            <p>"Nothing here."</p>
            <a href="/slides/1" on:click=go_home>
                <Icon icon=ic::HOME />
                "Back to the first slide"
            </a>
        </div>
    }
}
