//=========================================================================
// Transition Protocol
//=========================================================================
//
// Interchangeable strategies animating one scene handoff at a time.
//
// Architecture:
//   TransitionRegistry: id ──> factory(TransitionParams) ──> Box<dyn TransitionStrategy>
//
//   Navigator ── perform_in(ctx, done) ──> strategy ── Timeline ──> Tweener
//             <──────────── NavEvent::TransitionFinished ──────────────┘
//
// Contract:
// - `done` fires exactly once, asynchronously (via the tweener)
// - the arriving scene ends visible and settled (no filters, at origin)
// - a replaced scene ends hidden and settled; a scene covered by a modal
//   may keep its effects until `perform_out` clears them
// - strategies never touch the navigation stack
//
// Identifier format: "<id>" or "<id>:<config>" where <config> is free text
// interpreted by the strategy (direction, number, color).
//
//=========================================================================

//=== Module Declarations =================================================

mod fade;
mod jump;
mod over;
mod pixelate;
mod plax_mask;
mod registry;

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::nav::Completion;
use crate::core::scene::InstanceId;
use crate::core::stage::{Color, Stage};
use crate::core::tween::{Track, Tweener};

//=== Public API ==========================================================

pub use fade::FadeTransition;
pub use jump::JumpTransition;
pub use over::OverTransition;
pub use pixelate::PixelateTransition;
pub use plax_mask::PlaxMaskTransition;
pub use registry::{TransitionFactory, TransitionRegistry};

//=== TransitionSpec ======================================================

/// A parsed transition identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSpec {
    pub id: String,
    pub config: Option<String>,
}

impl TransitionSpec {
    /// Splits on the first colon: `"plaxmask:left"` → (`plaxmask`, `left`).
    pub fn parse(text: &str) -> Self {
        match text.split_once(':') {
            Some((id, config)) => Self {
                id: id.to_owned(),
                config: Some(config.to_owned()),
            },
            None => Self {
                id: text.to_owned(),
                config: None,
            },
        }
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.config {
            Some(config) => write!(f, "{}:{}", self.id, config),
            None => f.write_str(&self.id),
        }
    }
}

//=== TransitionParams ====================================================

/// Construction arguments handed to every strategy factory.
///
/// Scenes are supplied per call through [`TransitionContext`]; an entry's
/// scene can be swapped while its strategy lives (pending modal restoration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionParams {
    /// Base id the strategy was resolved from.
    pub transition_id: String,
    /// Free-text suffix after the colon.
    pub config: Option<String>,
    /// Whether the new scene is presented modally.
    pub is_modal: bool,
}

impl TransitionParams {
    pub fn new(transition_id: impl Into<String>, config: Option<String>, is_modal: bool) -> Self {
        Self {
            transition_id: transition_id.into(),
            config,
            is_modal,
        }
    }

    /// Config suffix with surrounding whitespace removed; empty counts as none.
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

//=== StackView ===========================================================

/// Navigator queries, snapshotted when a transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackView {
    /// Depth ≥ 2, top is modal and covers a previous scene.
    pub presenting_modal: bool,
    /// Top entry is modal.
    pub presented_modally: bool,
    /// Top entry shows underlying content through; leave the tint alone.
    pub transparent_bg: bool,
}

//=== TransitionContext ===================================================

/// Everything a strategy may touch while animating.
pub struct TransitionContext<'a> {
    /// Scene being presented (or dismissed, for `perform_out`).
    pub scene: InstanceId,
    /// Scene being covered/replaced (or revealed, for `perform_out`).
    pub scene_prev: Option<InstanceId>,
    pub stage: &'a mut Stage,
    pub tweens: &'a mut Tweener,
    pub stack: StackView,
}

impl TransitionContext<'_> {
    /// Tint track toward the arriving scene's background, unless transparent.
    pub fn arrival_tint(&self) -> Option<Track> {
        self.tint_toward(self.scene)
    }

    /// Tint track back toward the revealed scene's background.
    pub fn return_tint(&self) -> Option<Track> {
        self.scene_prev.and_then(|prev| self.tint_toward(prev))
    }

    /// Tint track toward an explicit color, unless transparent.
    pub fn tint_to(&self, color: Color) -> Option<Track> {
        if self.stack.transparent_bg {
            return None;
        }
        Some(Track::tint(self.stage.background().color(), color))
    }

    fn tint_toward(&self, instance: InstanceId) -> Option<Track> {
        self.tint_to(self.stage.background_for(instance))
    }
}

//=== TransitionStrategy Trait ============================================

/// One visual style of scene handoff.
///
/// `is_modal` and `is_transparent` are fixed at construction.
pub trait TransitionStrategy {
    /// Base id this strategy was registered under.
    fn id(&self) -> &str;

    fn is_modal(&self) -> bool;

    /// True if the presentation shows underlying content through, in which
    /// case the shared background tint is left untouched.
    fn is_transparent(&self) -> bool;

    /// Animates `ctx.scene` in (and `ctx.scene_prev` out, if present).
    fn perform_in(&mut self, ctx: &mut TransitionContext<'_>, done: Completion);

    /// Animates a modal dismissal: `ctx.scene` out, `ctx.scene_prev` back in.
    fn perform_out(&mut self, ctx: &mut TransitionContext<'_>, done: Completion);
}

impl fmt::Debug for dyn TransitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionStrategy")
            .field("id", &self.id())
            .field("is_modal", &self.is_modal())
            .field("is_transparent", &self.is_transparent())
            .finish()
    }
}

//=========================================================================
// Test Support
//=========================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::nav::{CompletionKind, NavEvent};
    use crate::core::scene::{Scene, SceneData};
    use crate::core::stage::{SceneNode, StageSize};
    use crossbeam_channel::{unbounded, Receiver, Sender};
    use std::time::Duration;

    struct Blank;
    impl Scene for Blank {}

    pub(crate) const PREV: InstanceId = InstanceId::from_raw(1111111);
    pub(crate) const NEXT: InstanceId = InstanceId::from_raw(2222222);
    pub(crate) const PREV_BG: Color = Color::from_u32(0x202020);
    pub(crate) const NEXT_BG: Color = Color::from_u32(0xa0c0e0);

    /// Stage with PREV visible and NEXT freshly attached (hidden).
    pub(crate) struct Rig {
        pub stage: Stage,
        pub tweens: Tweener,
        pub tx: Sender<NavEvent>,
        pub rx: Receiver<NavEvent>,
    }

    impl Rig {
        pub(crate) fn new() -> Self {
            let mut stage = Stage::new(StageSize::new(800, 600), PREV_BG);
            for (scene_id, instance, bg) in [("prev", PREV, PREV_BG), ("next", NEXT, NEXT_BG)] {
                let data = SceneData::new();
                stage.attach(SceneNode::new(scene_id, instance, data, Some(bg), Box::new(Blank)));
            }
            if let Some(visual) = stage.visual_mut(PREV) {
                visual.visible = true;
            }
            let (tx, rx) = unbounded();
            Self { stage, tweens: Tweener::new(), tx, rx }
        }

        pub(crate) fn perform_in(
            &mut self,
            strategy: &mut dyn TransitionStrategy,
            stack: StackView,
        ) {
            let done = Completion::new(1, CompletionKind::Arrival, self.tx.clone());
            let mut ctx = TransitionContext {
                scene: NEXT,
                scene_prev: Some(PREV),
                stage: &mut self.stage,
                tweens: &mut self.tweens,
                stack,
            };
            strategy.perform_in(&mut ctx, done);
        }

        pub(crate) fn perform_out(
            &mut self,
            strategy: &mut dyn TransitionStrategy,
            stack: StackView,
        ) {
            let done = Completion::new(2, CompletionKind::Departure, self.tx.clone());
            let mut ctx = TransitionContext {
                scene: NEXT,
                scene_prev: Some(PREV),
                stage: &mut self.stage,
                tweens: &mut self.tweens,
                stack,
            };
            strategy.perform_out(&mut ctx, done);
        }

        /// Ticks until the completion arrives; returns how many ticks it took.
        pub(crate) fn run(&mut self) -> Option<usize> {
            for ticks in 1..=1000 {
                self.tweens.tick(Duration::from_millis(16), &mut self.stage);
                if self.rx.try_recv().is_ok() {
                    assert!(self.rx.try_recv().is_err(), "completion fired twice");
                    return Some(ticks);
                }
            }
            None
        }

        pub(crate) fn visible(&self, id: InstanceId) -> bool {
            self.stage.visual(id).is_some_and(|v| v.visible)
        }

        pub(crate) fn settled(&self, id: InstanceId) -> bool {
            self.stage.visual(id).is_some_and(|v| v.is_settled())
        }
    }

    pub(crate) fn opaque() -> StackView {
        StackView::default()
    }

    pub(crate) fn modal_view(transparent: bool) -> StackView {
        StackView {
            presenting_modal: true,
            presented_modally: true,
            transparent_bg: transparent,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
