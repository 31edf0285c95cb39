//=========================================================================
// Jump Transition
//=========================================================================
//
// Instant cut. Everything is applied in a single zero-length step; the
// completion still arrives on the next tick.
//
//=========================================================================

use super::{TransitionContext, TransitionParams, TransitionStrategy};
use crate::core::nav::Completion;
use crate::core::scene::InstanceId;
use crate::core::tween::{Action, Timeline};

#[derive(Debug, Clone)]
pub struct JumpTransition {
    is_modal: bool,
}

impl JumpTransition {
    pub fn new(params: &TransitionParams) -> Self {
        Self { is_modal: params.is_modal }
    }
}

fn tint_action(ctx: &TransitionContext<'_>, toward: InstanceId) -> Option<Action> {
    (!ctx.stack.transparent_bg).then(|| Action::Tint(ctx.stage.background_for(toward)))
}

impl TransitionStrategy for JumpTransition {
    fn id(&self) -> &str {
        "jump"
    }

    fn is_modal(&self) -> bool {
        self.is_modal
    }

    fn is_transparent(&self) -> bool {
        false
    }

    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let mut actions = vec![Action::ResetEffects(scene), Action::Show(scene)];
        actions.extend(tint_action(ctx, scene));
        if let Some(prev) = ctx.scene_prev.filter(|_| !self.is_modal) {
            actions.extend([Action::Hide(prev), Action::ResetEffects(prev)]);
        }
        ctx.tweens.play(Timeline::new().apply(actions).signal(done));
    }

    fn perform_out(&mut self, ctx: &mut TransitionContext<'_>, done: Completion) {
        let scene = ctx.scene;
        let mut actions = vec![Action::Hide(scene), Action::ResetEffects(scene)];
        if let Some(prev) = ctx.scene_prev {
            actions.extend([Action::Show(prev), Action::ResetEffects(prev)]);
            actions.extend(tint_action(ctx, prev));
        }
        ctx.tweens.play(Timeline::new().apply(actions).signal(done));
    }
}
