//=========================================================================
// Over Transition
//=========================================================================
//
// The new scene slides over the old one while the old one blurs.
//
// Config: travel direction (default "down", i.e. drops in from the top).
// Modal presentations are transparent: the covered scene stays visible
// and blurred underneath, and the background tint is left alone.
//
//=========================================================================

use std::time::Duration;

use log::warn;

use super::{TransitionContext, TransitionParams, TransitionStrategy};
use crate::core::nav::Completion;
use crate::core::stage::{Direction, Property};
use crate::core::tween::{Action, Easing, Timeline, Track};

const DURATION: Duration = Duration::from_millis(450);
const BLUR_RADIUS: f32 = 8.0;

#[derive(Debug, Clone)]
pub struct OverTransition {
    is_modal: bool,
    direction: Direction,
}

impl OverTransition {
    pub fn new(params: &TransitionParams) -> Self {
        let direction = match params.config() {
            None => Direction::Down,
            Some(config) => Direction::parse(config).unwrap_or_else(|| {
                warn!("Unknown over direction {:?}, sliding down", config);
                Direction::Down
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
}

impl TransitionStrategy for OverTransition {
    fn id(&self) -> &str {
        "over"
    }

    fn is_modal(&self) -> bool {
        self.is_modal
    }

    fn is_transparent(&self) -> bool {
        self.is_modal
    }

    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let (dx, dy) = self.direction.entry_offset(ctx.stage.size());

        let mut tracks = vec![
            Track::scalar(scene, Property::X, dx, 0.0),
            Track::scalar(scene, Property::Y, dy, 0.0),
        ];
        tracks.extend(ctx.arrival_tint());
        if let Some(prev) = ctx.scene_prev {
            tracks.push(Track::scalar(prev, Property::Blur, 0.0, BLUR_RADIUS));
        }

        let mut timeline = Timeline::new()
            .apply([
                Action::ResetEffects(scene),
                Action::Set(scene, Property::X, dx),
                Action::Set(scene, Property::Y, dy),
                Action::Show(scene),
            ])
            .animate(DURATION, Easing::EaseOut, tracks);

        if let Some(prev) = ctx.scene_prev.filter(|_| !self.is_modal) {
            timeline = timeline.apply([Action::Hide(prev), Action::ResetEffects(prev)]);
        }
        ctx.tweens.play(timeline.signal(done));
    }

    fn perform_out(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let (dx, dy) = self.direction.entry_offset(ctx.stage.size());

        let mut tracks = vec![
            Track::scalar(scene, Property::X, 0.0, dx),
            Track::scalar(scene, Property::Y, 0.0, dy),
        ];
        tracks.extend(ctx.return_tint());

        let mut timeline = Timeline::new();
        if let Some(prev) = ctx.scene_prev {
            let blur = ctx.stage.visual(prev).map_or(0.0, |v| v.get(Property::Blur));
            tracks.push(Track::scalar(prev, Property::Blur, blur, 0.0));
            timeline = timeline.apply([Action::Show(prev)]);
        }

        let mut finish = vec![Action::Hide(scene), Action::ResetEffects(scene)];
        finish.extend(ctx.scene_prev.map(Action::ResetEffects));

        ctx.tweens.play(
            timeline
                .animate(DURATION, Easing::EaseIn, tracks)
                .apply(finish)
                .signal(done),
        );
    }
}
