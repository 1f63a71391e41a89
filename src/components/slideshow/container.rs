//! Slideshow container component.
//!
//! Owns the agreed direction and keeps the stage in line with the address.
//! A re-render at an unchanged slide is a no-op; a new slide mounts a fresh
//! [`Slide`] seeded with the direction its predecessor reported.

use leptos::prelude::*;
use slides_core::{Direction, NavigationAddressBinding, SlideshowState};

use super::slide::Slide;
use super::stage::{Frame, Stage};
use crate::config::{APP_NAME, TRANSITION_TIMEOUT_MS};
use crate::location::BrowserLocation;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/slideshow/slideshow.module.css");

/// Slideshow container.
///
/// # Props
/// - `binding`: address binding shared with the router
#[component]
pub fn Slideshow(binding: NavigationAddressBinding<BrowserLocation>) -> impl IntoView {
    let state = StoredValue::new(SlideshowState::new(TRANSITION_TIMEOUT_MS));
    let mut stage = Stage::new();

    let on_change = Callback::new(move |direction: Direction| {
        state.update_value(|s| s.set_direction(direction));
    });

    // Mount the initial slide before first paint; the effect below then
    // re-runs whenever the location signal changes.
    state.update_value(|s| {
        s.render(&binding, &mut stage);
    });
    Effect::new(move || {
        state.update_value(|s| {
            let view = s.render(&binding, &mut stage);
            dom::set_title(&format!("{} | {}", view.content_label(), APP_NAME));
        });
    });

    let frames = stage.frames();

    view! {
        <div class=css::stage>
            <For
                each=move || frames.get()
                key=|frame: &Frame| frame.id
                children=move |frame: Frame| {
                    view! {
                        <Slide
                            view=frame.view
                            phase=frame.phase
                            binding=binding
                            on_change=on_change
                        />
                    }
                }
            />
        </div>
    }
}
