//=========================================================================
// Pixelate Transition
//=========================================================================
//
// Dissolve through coarse pixel blocks: the outgoing scene coarsens, the
// incoming one sharpens. Config: maximum block size in pixels (default 24).
//
//=========================================================================

use std::time::Duration;

use log::warn;

use super::{TransitionContext, TransitionParams, TransitionStrategy};
use crate::core::nav::Completion;
use crate::core::scene::InstanceId;
use crate::core::stage::Property;
use crate::core::tween::{Action, Easing, Timeline, Track};

const DURATION: Duration = Duration::from_millis(600);
const DEFAULT_BLOCK: f32 = 24.0;

#[derive(Debug, Clone)]
pub struct PixelateTransition {
    is_modal: bool,
    block: f32,
}

impl PixelateTransition {
    pub fn new(params: &TransitionParams) -> Self {
        let block = match params.config() {
            None => DEFAULT_BLOCK,
            Some(config) => match config.parse::<f32>() {
                Ok(size) if size >= 1.0 && size.is_finite() => size,
                _ => {
                    warn!("Invalid pixelate block size {:?}, using {}", config, DEFAULT_BLOCK);
                    DEFAULT_BLOCK
                }
            },
        };
        Self {
            is_modal: params.is_modal,
            block,
        }
    }

    pub fn block(&self) -> f32 {
        self.block
    }

    fn sharpen(&self, target: InstanceId) -> [Track; 2] {
        [
            Track::scalar(target, Property::Pixelate, self.block, 1.0),
            Track::scalar(target, Property::Alpha, 0.0, 1.0),
        ]
    }

    fn coarsen(&self, target: InstanceId) -> [Track; 2] {
        [
            Track::scalar(target, Property::Pixelate, 1.0, self.block),
            Track::scalar(target, Property::Alpha, 1.0, 0.0),
        ]
    }
}

impl TransitionStrategy for PixelateTransition {
    fn id(&self) -> &str {
        "pixelate"
    }

    fn is_modal(&self) -> bool {
        self.is_modal
    }

    fn is_transparent(&self) -> bool {
        false
    }

    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let tint = ctx.arrival_tint();
        let mut timeline = Timeline::new().apply([
            Action::ResetEffects(scene),
            Action::Set(scene, Property::Alpha, 0.0),
            Action::Set(scene, Property::Pixelate, self.block),
            Action::Show(scene),
        ]);

        match ctx.scene_prev.filter(|_| !self.is_modal) {
            Some(prev) => {
                let half = DURATION / 2;
                timeline = timeline
                    .animate(half, Easing::EaseIn, self.coarsen(prev).into_iter().chain(tint))
                    .apply([Action::Hide(prev), Action::ResetEffects(prev)])
                    .animate(half, Easing::EaseOut, self.sharpen(scene));
            }
            None => {
                timeline = timeline.animate(
                    DURATION,
                    Easing::EaseInOut,
                    self.sharpen(scene).into_iter().chain(tint),
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

        let mut finish = vec![Action::Hide(scene), Action::ResetEffects(scene)];
        finish.extend(ctx.scene_prev.map(Action::ResetEffects));

        ctx.tweens.play(
            timeline
                .animate(
                    DURATION,
                    Easing::EaseInOut,
                    self.coarsen(scene).into_iter().chain(ctx.return_tint()),
                )
                .apply(finish)
                .signal(done),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::test_support::*;

    fn pixelate(config: Option<&str>, is_modal: bool) -> PixelateTransition {
        PixelateTransition::new(&TransitionParams::new(
            "pixelate",
            config.map(str::to_owned),
            is_modal,
        ))
    }

    #[test]
    fn block_size_parses_numbers_only() {
        assert_eq!(pixelate(None, false).block(), DEFAULT_BLOCK);
        assert_eq!(pixelate(Some("40"), false).block(), 40.0);
        assert_eq!(pixelate(Some("0.5"), false).block(), DEFAULT_BLOCK);
        assert_eq!(pixelate(Some("left"), false).block(), DEFAULT_BLOCK);
    }

    #[test]
    fn incoming_scene_starts_coarse() {
        let mut rig = Rig::new();
        rig.perform_in(&mut pixelate(Some("16"), true), modal_view(false));

        rig.tweens.tick(Duration::ZERO, &mut rig.stage);

        assert_eq!(rig.stage.visual(NEXT).map(|v| v.get(Property::Pixelate)), Some(16.0));
    }

    #[test]
    fn replace_ends_sharp_and_hidden() {
        let mut rig = Rig::new();
        rig.perform_in(&mut pixelate(None, false), opaque());

        assert!(rig.run().is_some());
        assert!(rig.settled(NEXT) && rig.settled(PREV));
        assert!(!rig.visible(PREV));
        assert_eq!(rig.stage.background().color(), NEXT_BG);
    }

    #[test]
    fn perform_out_dissolves_modal() {
        let mut rig = Rig::new();
        let mut strategy = pixelate(None, true);
        rig.perform_in(&mut strategy, modal_view(false));
        rig.run();

        rig.perform_out(&mut strategy, modal_view(false));

        assert!(rig.run().is_some());
        assert!(!rig.visible(NEXT));
        assert_eq!(rig.stage.background().color(), PREV_BG);
    }
}
