//! End-to-end navigation scenarios against an in-memory history.

use slides_core::{
    ControlKind, Direction, LocationService, MemoryLocation, NavigationAddressBinding,
    SlideView, SlideshowState, TransitionRunner, TransitionSpec,
};

const TIMEOUT_MS: u32 = 500;

#[derive(Default)]
struct RecordingRunner {
    specs: Vec<TransitionSpec>,
}

impl TransitionRunner for RecordingRunner {
    fn run(&mut self, spec: TransitionSpec, child: &SlideView) {
        assert_eq!(child.display_direction(), spec.direction);
        self.specs.push(spec);
    }
}

struct Harness {
    location: MemoryLocation,
    binding: NavigationAddressBinding<MemoryLocation>,
    state: SlideshowState,
    runner: RecordingRunner,
}

impl Harness {
    fn at(path: &str) -> Self {
        let location = MemoryLocation::new(path);
        let mut harness = Self {
            binding: NavigationAddressBinding::new(location.clone()),
            location,
            state: SlideshowState::new(TIMEOUT_MS),
            runner: RecordingRunner::default(),
        };
        harness.binding.redirect_root();
        harness.render();
        harness
    }

    fn render(&mut self) {
        self.state.render(&self.binding, &mut self.runner);
    }

    /// Click a control and let the container re-render.
    fn click(&mut self, kind: ControlKind) -> Option<Direction> {
        let direction = self.state.activate(kind, &self.binding);
        self.render();
        direction
    }

    fn index(&self) -> u32 {
        self.binding.current_index().get()
    }

    fn previous_disabled(&self) -> bool {
        self.state.current().unwrap().previous().disabled
    }

    fn next_disabled(&self) -> bool {
        self.state.current().unwrap().next().disabled
    }

    fn mounted_direction(&self) -> Direction {
        self.state.current().unwrap().display_direction()
    }
}

#[test]
fn test_root_redirects_to_first_slide() {
    let harness = Harness::at("/");
    assert_eq!(harness.location.path(), "/slides/1");
    assert_eq!(harness.location.len(), 1);
    assert_eq!(harness.index(), 1);
}

#[test]
fn test_next_from_first_slide() {
    let mut harness = Harness::at("/slides/1");
    assert!(harness.previous_disabled());
    assert!(!harness.next_disabled());

    let direction = harness.click(ControlKind::Next);

    assert_eq!(direction, Some(Direction::Forward));
    assert_eq!(harness.location.path(), "/slides/2");
    assert_eq!(harness.state.direction(), Direction::Forward);
    assert_eq!(harness.mounted_direction(), Direction::Forward);
    assert_eq!(harness.runner.specs.len(), 2);
    assert_eq!(harness.runner.specs[1].key.as_str(), "/slides/2");
}

#[test]
fn test_previous_from_last_slide() {
    let mut harness = Harness::at("/slides/100");
    assert!(harness.next_disabled());
    assert!(!harness.previous_disabled());

    let direction = harness.click(ControlKind::Previous);

    assert_eq!(direction, Some(Direction::Backward));
    assert_eq!(harness.location.path(), "/slides/99");
    assert_eq!(harness.state.direction(), Direction::Backward);
    assert_eq!(harness.runner.specs[1].direction_class(), "right");
}

#[test]
fn test_next_then_previous_direction_sequence() {
    let mut harness = Harness::at("/slides/1");

    let observed = [
        harness.click(ControlKind::Next),
        harness.click(ControlKind::Previous),
    ];

    assert_eq!(observed, [Some(Direction::Forward), Some(Direction::Backward)]);
    assert_eq!(harness.index(), 1);
    let directions: Vec<_> = harness.runner.specs.iter().map(|s| s.direction).collect();
    assert_eq!(
        directions,
        vec![Direction::Forward, Direction::Forward, Direction::Backward]
    );
}

#[test]
fn test_new_view_seeded_from_updated_direction() {
    let mut harness = Harness::at("/slides/10");
    harness.click(ControlKind::Previous);
    assert_eq!(harness.mounted_direction(), Direction::Backward);

    harness.click(ControlKind::Next);
    assert_eq!(harness.mounted_direction(), Direction::Forward);
}

#[test]
fn test_disabled_click_changes_nothing() {
    let mut harness = Harness::at("/slides/1");

    assert_eq!(harness.click(ControlKind::Previous), None);

    assert_eq!(harness.location.len(), 1);
    assert_eq!(harness.runner.specs.len(), 1);
    assert_eq!(harness.state.direction(), Direction::Forward);
}

#[test]
fn test_history_back_remounts_without_direction_change() {
    let mut harness = Harness::at("/slides/1");
    harness.click(ControlKind::Next);
    harness.click(ControlKind::Next);

    assert!(harness.location.back());
    harness.render();

    assert_eq!(harness.index(), 2);
    assert_eq!(harness.runner.specs.len(), 4);
    assert_eq!(harness.state.direction(), Direction::Forward);
}

#[test]
fn test_malformed_location_shows_first_slide() {
    let harness = Harness::at("/slides/banana");
    assert_eq!(harness.index(), 1);
    assert!(harness.previous_disabled());
    assert_eq!(harness.state.current_key().unwrap().as_str(), "/slides/1");
}

#[test]
fn test_walk_to_the_end() {
    let mut harness = Harness::at("/slides/1");
    while !harness.next_disabled() {
        harness.click(ControlKind::Next);
    }

    assert_eq!(harness.index(), 100);
    assert_eq!(harness.location.len(), 100);
    assert_eq!(harness.click(ControlKind::Next), None);
}
