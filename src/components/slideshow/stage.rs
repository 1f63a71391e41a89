//! Transition runner for slide swaps.
//!
//! The stage keeps one frame per mounted slide: the entering one plus any
//! that are still animating out. Each frame's phase is its own signal so a
//! swap restyles existing slides without re-rendering them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use slides_core::{SlideView, TransitionRunner, TransitionSpec};
use wasm_bindgen_futures::spawn_local;

/// Animation phase of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Entered,
    Exiting,
}

impl Phase {
    /// Global class the stylesheet animates on.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Entering => "enter",
            Self::Entered => "",
            Self::Exiting => "exit",
        }
    }
}

/// One mounted slide.
#[derive(Clone)]
pub struct Frame {
    pub id: u64,
    pub view: SlideView,
    pub phase: RwSignal<Phase>,
}

#[derive(Clone, Copy)]
pub struct Stage {
    frames: RwSignal<Vec<Frame>>,
    next_id: StoredValue<u64>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            frames: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn frames(&self) -> RwSignal<Vec<Frame>> {
        self.frames
    }

    /// Mount `child` as the entering frame and mark every other frame as
    /// exiting. The very first frame is shown without an enter animation.
    ///
    /// Returns the new frame's id.
    pub fn begin(&self, child: &SlideView) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.frames.update(|frames| {
            let phase = if frames.is_empty() {
                Phase::Entered
            } else {
                Phase::Entering
            };
            for frame in frames.iter() {
                frame.phase.set(Phase::Exiting);
            }
            frames.push(Frame {
                id,
                view: child.clone(),
                phase: RwSignal::new(phase),
            });
        });

        id
    }

    /// Finish the transition that mounted frame `id`: frames older than it
    /// are removed and it becomes [`Phase::Entered`] unless a newer
    /// transition has already started exiting it.
    pub fn settle(&self, id: u64) {
        self.frames.update(|frames| {
            frames.retain(|frame| frame.id >= id);
            if let Some(frame) = frames.iter().find(|frame| frame.id == id)
                && frame.phase.get_untracked() == Phase::Entering
            {
                frame.phase.set(Phase::Entered);
            }
        });
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionRunner for Stage {
    fn run(&mut self, spec: TransitionSpec, child: &SlideView) {
        let id = self.begin(child);
        let stage = *self;
        spawn_local(async move {
            TimeoutFuture::new(spec.timeout_ms).await;
            stage.settle(id);
        });
    }
}
