//=========================================================================
// Tween Driver
//=========================================================================
//
// Minimal retained-mode animation engine used by transition strategies.
//
// Architecture:
//   Tweener
//     └─ timelines: Vec<Timeline>
//           └─ steps: VecDeque<Step>  ─ Animate | Apply | Delay
//           └─ completion: Option<Completion>
//
// Flow:
//   strategy.perform_*() → Timeline::new()...signal(done) → Tweener::play()
//   Navigator::update() → Tweener::tick(dt, stage) → Completion::fire()
//
// Timelines never advance when they are played, only on `tick`, so a
// zero-length timeline still completes after the call that scheduled it.
//
//=========================================================================

//=== Module Declarations =================================================

mod easing;

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::nav::Completion;
use crate::core::scene::InstanceId;
use crate::core::stage::{Color, Filter, Property, Stage};

//=== Public API ==========================================================

pub use easing::Easing;

//=== Track ===============================================================

/// One interpolated value inside an [`Step::Animate`] step.
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    /// Scalar property of a scene's visual.
    Scalar {
        target: InstanceId,
        property: Property,
        from: f32,
        to: f32,
    },
    /// Stage background tint.
    Tint { from: Color, to: Color },
}

impl Track {
    pub fn scalar(target: InstanceId, property: Property, from: f32, to: f32) -> Self {
        Self::Scalar { target, property, from, to }
    }

    pub fn tint(from: Color, to: Color) -> Self {
        Self::Tint { from, to }
    }

    fn sample(&self, stage: &mut Stage, t: f32) {
        match *self {
            Self::Scalar { target, property, from, to } => {
                if let Some(visual) = stage.visual_mut(target) {
                    visual.set(property, from + (to - from) * t);
                }
            }
            Self::Tint { from, to } => stage.background_mut().set_color(from.lerp(to, t)),
        }
    }
}

//=== Action ==============================================================

/// Instant mutation applied by a [`Step::Apply`] step.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Show(InstanceId),
    Hide(InstanceId),
    Set(InstanceId, Property, f32),
    PushFilter(InstanceId, Filter),
    ResetEffects(InstanceId),
    Tint(Color),
}

impl Action {
    fn apply(&self, stage: &mut Stage) {
        match *self {
            Self::Tint(color) => stage.background_mut().set_color(color),
            Self::Show(id) => {
                if let Some(visual) = stage.visual_mut(id) {
                    visual.visible = true;
                }
            }
            Self::Hide(id) => {
                if let Some(visual) = stage.visual_mut(id) {
                    visual.visible = false;
                }
            }
            Self::Set(id, property, value) => {
                if let Some(visual) = stage.visual_mut(id) {
                    visual.set(property, value);
                }
            }
            Self::PushFilter(id, filter) => {
                if let Some(visual) = stage.visual_mut(id) {
                    visual.filters.push(filter);
                }
            }
            Self::ResetEffects(id) => {
                if let Some(visual) = stage.visual_mut(id) {
                    visual.reset_effects();
                }
            }
        }
    }
}

//=== Step ================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Interpolates all tracks in parallel.
    Animate {
        duration: Duration,
        easing: Easing,
        tracks: Vec<Track>,
    },
    /// Applies actions instantly.
    Apply(Vec<Action>),
    /// Waits.
    Delay(Duration),
}

impl Step {
    fn length(&self) -> Duration {
        match self {
            Self::Animate { duration, .. } | Self::Delay(duration) => *duration,
            Self::Apply(_) => Duration::ZERO,
        }
    }

    fn sample(&self, stage: &mut Stage, progress: f32) {
        if let Self::Animate { easing, tracks, .. } = self {
            let t = easing.apply(progress);
            for track in tracks {
                track.sample(stage, t);
            }
        }
    }

    fn finish(&self, stage: &mut Stage) {
        match self {
            Self::Animate { tracks, .. } => {
                for track in tracks {
                    track.sample(stage, 1.0);
                }
            }
            Self::Apply(actions) => {
                for action in actions {
                    action.apply(stage);
                }
            }
            Self::Delay(_) => {}
        }
    }
}

//=== Timeline ============================================================

/// Sequential list of steps with an optional completion at the end.
#[derive(Debug, Default)]
pub struct Timeline {
    steps: VecDeque<Step>,
    step_elapsed: Duration,
    completion: Option<Completion>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Building ---------------------------------------------------------

    /// Appends instant actions. Empty batches are skipped.
    pub fn apply(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        let actions: Vec<_> = actions.into_iter().collect();
        if !actions.is_empty() {
            self.steps.push_back(Step::Apply(actions));
        }
        self
    }

    /// Appends a parallel animation. Empty track lists are skipped.
    pub fn animate(
        mut self,
        duration: Duration,
        easing: Easing,
        tracks: impl IntoIterator<Item = Track>,
    ) -> Self {
        let tracks: Vec<_> = tracks.into_iter().collect();
        if !tracks.is_empty() {
            self.steps.push_back(Step::Animate { duration, easing, tracks });
        }
        self
    }

    pub fn delay(mut self, duration: Duration) -> Self {
        self.steps.push_back(Step::Delay(duration));
        self
    }

    /// Fires `done` once every step has run.
    pub fn signal(mut self, done: Completion) -> Self {
        self.completion = Some(done);
        self
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Sum of all step lengths.
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(Step::length).sum()
    }

    //--- advance() --------------------------------------------------------
    //
    // Spends `dt` across as many steps as it covers, carrying leftover time
    // into the next step. Returns true once the timeline has finished and
    // its completion (if any) has fired.
    //
    fn advance(&mut self, dt: Duration, stage: &mut Stage) -> bool {
        let mut budget = dt;

        while let Some(step) = self.steps.front() {
            let length = step.length();
            let remaining = length.saturating_sub(self.step_elapsed);

            if budget >= remaining {
                budget -= remaining;
                step.finish(stage);
                self.steps.pop_front();
                self.step_elapsed = Duration::ZERO;
            } else {
                self.step_elapsed += budget;
                let progress = self.step_elapsed.as_secs_f32() / length.as_secs_f32();
                step.sample(stage, progress);
                return false;
            }
        }

        if let Some(done) = self.completion.take() {
            done.fire();
        }
        true
    }
}

//=== Tweener =============================================================

/// Runs every active timeline against the stage.
#[derive(Debug, Default)]
pub struct Tweener {
    timelines: Vec<Timeline>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timeline; it starts on the next [`tick`](Self::tick).
    pub fn play(&mut self, timeline: Timeline) {
        self.timelines.push(timeline);
    }

    /// Advances all timelines, dropping and signalling the finished ones.
    pub fn tick(&mut self, dt: Duration, stage: &mut Stage) {
        self.timelines.retain_mut(|timeline| !timeline.advance(dt, stage));
    }

    /// Drops every timeline without firing completions.
    pub fn clear(&mut self) {
        if !self.timelines.is_empty() {
            debug!("Discarding {} running timeline(s)", self.timelines.len());
        }
        self.timelines.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.timelines.is_empty()
    }

    pub fn active(&self) -> usize {
        self.timelines.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
