//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Navigator facade
pub use crate::builder::NavigatorBuilder;
pub use crate::core::nav::{Completion, NavHandle, NavPhase, Navigator, ReadySignal};

// Errors
pub use crate::core::error::{ConfigurationError, InvalidStateError, NavError};

// Scene system
pub use crate::core::scene::{Scene, SceneConfig, SceneData, SceneRegistry};

// Transitions
pub use crate::core::transition::{
    TransitionContext, TransitionParams, TransitionRegistry, TransitionStrategy,
};

// Stage and input
pub use crate::core::input::{InputEvent, KeyCode, PointerButton};
pub use crate::core::stage::{Color, Direction, StageSize};
