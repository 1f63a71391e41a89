//! A single slide: previous control, content, next control.

use leptos::prelude::*;
use leptos_icons::Icon;
use slides_core::{ControlKind, Direction, NavigationAddressBinding, SlideView};

use super::stage::Phase;
use crate::components::icons as ic;
use crate::location::BrowserLocation;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/slideshow/slideshow.module.css");

/// Root class for a slide: layout, direction, and animation phase.
fn root_class(direction: Direction, phase: Phase) -> String {
    let mut class = format!("{} {}", css::slide, direction.class_name());
    let phase = phase.class_name();
    if !phase.is_empty() {
        class.push(' ');
        class.push_str(phase);
    }
    class
}

/// Slide component.
///
/// Owns a copy of the [`SlideView`] it was mounted with. Clicking a control
/// reports the new direction through `on_change` before the location moves,
/// and switches this instance's own direction class so its exit animation
/// runs the right way.
///
/// # Props
/// - `view`: the slide as mounted by the container
/// - `phase`: animation phase driven by the stage
/// - `binding`: where navigation requests go
/// - `on_change`: direction notifier owned by the container
#[component]
pub fn Slide(
    view: SlideView,
    phase: RwSignal<Phase>,
    binding: NavigationAddressBinding<BrowserLocation>,
    on_change: Callback<Direction>,
) -> impl IntoView {
    let previous = view.previous();
    let next = view.next();
    let label = view.content_label();
    let slide = RwSignal::new(view);

    let exiting = move || phase.get() == Phase::Exiting;

    let activate = move |kind: ControlKind| {
        if phase.get_untracked() == Phase::Exiting {
            return;
        }
        slide.update(|s| {
            let from = s.index();
            if let Some(direction) = s.activate(kind, |d| on_change.run(d), &binding) {
                log::debug(&format!("slide {} -> {} ({})", from, kind.label(), direction));
            }
        });
    };

    view! {
        <div class=move || root_class(slide.with(|s| s.display_direction()), phase.get())>
            <button
                class=format!("{} {}", css::nav, css::previous)
                disabled=move || previous.disabled || exiting()
                on:click=move |_| activate(ControlKind::Previous)
            >
                <Icon icon=ic::PREVIOUS />
                <span class=css::navLabel>{ControlKind::Previous.label()}</span>
            </button>

            <div class=css::content>{label}</div>

            <button
                class=format!("{} {}", css::nav, css::next)
                disabled=move || next.disabled || exiting()
                on:click=move |_| activate(ControlKind::Next)
            >
                <span class=css::navLabel>{ControlKind::Next.label()}</span>
                <Icon icon=ic::NEXT />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_class() {
        assert_eq!(
            root_class(Direction::Forward, Phase::Entered),
            format!("{} left", css::slide)
        );
        assert_eq!(
            root_class(Direction::Backward, Phase::Exiting),
            format!("{} right exit", css::slide)
        );
        assert_eq!(
            root_class(Direction::Forward, Phase::Entering),
            format!("{} left enter", css::slide)
        );
    }
}
