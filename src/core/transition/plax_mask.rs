//=========================================================================
// Parallax Mask Transition
//=========================================================================
//
// A rectangular mask sweeps the new scene in while the old one drifts the
// same way at a fraction of the speed.
//
// Config: travel direction (default "left", i.e. sweeps in from the right
// edge), e.g. "plaxmask:up".
//
//=========================================================================

use std::time::Duration;

use log::warn;

use super::{TransitionContext, TransitionParams, TransitionStrategy};
use crate::core::nav::Completion;
use crate::core::stage::{Direction, Filter, Property};
use crate::core::tween::{Action, Easing, Timeline, Track};

const DURATION: Duration = Duration::from_millis(700);

/// Fraction of the stage the outgoing scene drifts while being covered.
const PARALLAX: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct PlaxMaskTransition {
    is_modal: bool,
    direction: Direction,
}

impl PlaxMaskTransition {
    pub fn new(params: &TransitionParams) -> Self {
        let direction = match params.config() {
            None => Direction::Left,
            Some(config) => Direction::parse(config).unwrap_or_else(|| {
                warn!("Unknown plaxmask direction {:?}, sweeping left", config);
                Direction::Left
            }),
        };
        Self {
            is_modal: params.is_modal,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn mask(&self, reveal: f32) -> Filter {
        Filter::Mask {
            reveal,
            from: self.direction.opposite(),
        }
    }
}

impl TransitionStrategy for PlaxMaskTransition {
    fn id(&self) -> &str {
        "plaxmask"
    }

    fn is_modal(&self) -> bool {
        self.is_modal
    }

    fn is_transparent(&self) -> bool {
        false
    }

    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let mut tracks = vec![Track::scalar(scene, Property::MaskReveal, 0.0, 1.0)];
        tracks.extend(ctx.arrival_tint());

        let drifting = ctx.scene_prev.filter(|_| !self.is_modal);
        if let Some(prev) = drifting {
            let (dx, dy) = self.direction.entry_offset(ctx.stage.size());
            tracks.push(Track::scalar(prev, Property::X, 0.0, -dx * PARALLAX));
            tracks.push(Track::scalar(prev, Property::Y, 0.0, -dy * PARALLAX));
        }

        let mut finish = vec![Action::ResetEffects(scene)];
        if let Some(prev) = drifting {
            finish.extend([Action::Hide(prev), Action::ResetEffects(prev)]);
        }

        ctx.tweens.play(
            Timeline::new()
                .apply([
                    Action::ResetEffects(scene),
                    Action::PushFilter(scene, self.mask(0.0)),
                    Action::Show(scene),
                ])
                .animate(DURATION, Easing::EaseInOut, tracks)
                .apply(finish)
                .signal(done),
        );
    }

    fn perform_out(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let mut tracks = vec![Track::scalar(scene, Property::MaskReveal, 1.0, 0.0)];
        tracks.extend(ctx.return_tint());

        let mut timeline = Timeline::new().apply([
            Action::ResetEffects(scene),
            Action::PushFilter(scene, self.mask(1.0)),
        ]);
        if let Some(prev) = ctx.scene_prev {
            timeline = timeline.apply([Action::Show(prev)]);
        }

        let mut finish = vec![Action::Hide(scene), Action::ResetEffects(scene)];
        finish.extend(ctx.scene_prev.map(Action::ResetEffects));

        ctx.tweens.play(
            timeline
                .animate(DURATION, Easing::EaseInOut, tracks)
                .apply(finish)
                .signal(done),
        );
    }
}
