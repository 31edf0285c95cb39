//=========================================================================
// Fade Transition
//=========================================================================
//
// Non-modal: outgoing scene fades to nothing, then the new one fades in.
// Modal: the new scene fades in over the covered one.
//
// Config: optional color flashed through between the halves, e.g.
// "fade:#ffffff" or "fade:000000".
//
//=========================================================================

use std::time::Duration;

use log::warn;

use super::{TransitionContext, TransitionParams, TransitionStrategy};
use crate::core::nav::Completion;
use crate::core::stage::{Color, Property};
use crate::core::tween::{Action, Easing, Timeline, Track};

const DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct FadeTransition {
    is_modal: bool,
    flash: Option<Color>,
    duration: Duration,
}

impl FadeTransition {
    pub fn new(params: &TransitionParams) -> Self {
        let flash = params.config().and_then(|config| {
            let color = Color::parse(config);
            if color.is_none() {
                warn!("Ignoring fade config {:?}: not a color", config);
            }
            color
        });
        Self {
            is_modal: params.is_modal,
            flash,
            duration: DURATION,
        }
    }

    /// Overrides the total animation length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Tint for the first half: straight to the flash color if any.
    fn first_half_tint(&self, ctx: &TransitionContext<'_>, target: Option<Track>) -> Option<Track> {
        match self.flash {
            Some(color) => ctx.tint_to(color),
            None => target,
        }
    }

    /// Tint for the second half: from the flash color to `target`.
    fn second_half_tint(&self, target: Option<Track>) -> Option<Track> {
        match (self.flash, target) {
            (Some(flash), Some(Track::Tint { to, .. })) => Some(Track::tint(flash, to)),
            _ => None,
        }
    }
}

impl TransitionStrategy for FadeTransition {
    fn id(&self) -> &str {
        "fade"
    }

    fn is_modal(&self) -> bool {
        self.is_modal
    }

    fn is_transparent(&self) -> bool {
        false
    }

    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let half = self.duration / 2;
        let tint = ctx.arrival_tint();
        let mut timeline =
            Timeline::new().apply([Action::Set(scene, Property::Alpha, 0.0), Action::Show(scene)]);

        match ctx.scene_prev.filter(|_| !self.is_modal) {
            Some(prev) => {
                let first = self.first_half_tint(ctx, tint.clone());
                let second = self.second_half_tint(tint);
                timeline = timeline
                    .animate(
                        half,
                        Easing::EaseIn,
                        [Track::scalar(prev, Property::Alpha, 1.0, 0.0)].into_iter().chain(first),
                    )
                    .apply([Action::Hide(prev), Action::ResetEffects(prev)])
                    .animate(
                        half,
                        Easing::EaseOut,
                        [Track::scalar(scene, Property::Alpha, 0.0, 1.0)].into_iter().chain(second),
                    );
            }
            None => {
                timeline = timeline.animate(
                    self.duration,
                    Easing::EaseInOut,
                    [Track::scalar(scene, Property::Alpha, 0.0, 1.0)].into_iter().chain(tint),
                );
            }
        }

        ctx.tweens.play(timeline.apply([Action::ResetEffects(scene)]).signal(done));
    }

    fn perform_out(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let mut timeline = Timeline::new();
        if let Some(prev) = ctx.scene_prev {
            timeline = timeline.apply([Action::Show(prev)]);
        }

        timeline = timeline
            .animate(
                self.duration,
                Easing::EaseInOut,
                [Track::scalar(scene, Property::Alpha, 1.0, 0.0)]
                    .into_iter()
                    .chain(ctx.return_tint()),
            )
            .apply([Action::Hide(scene), Action::ResetEffects(scene)]);

        if let Some(prev) = ctx.scene_prev {
            timeline = timeline.apply([Action::ResetEffects(prev)]);
        }
        ctx.tweens.play(timeline.signal(done));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
