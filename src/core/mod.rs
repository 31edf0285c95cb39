//=========================================================================
// Navigation Core
//
// All subsystems of the scene navigator.
//
// Responsibilities:
// - `nav`: the navigation state machine (stack, lock, deferrals)
// - `scene`: the lifecycle contract scenes implement, plus the registry
// - `transition`: the strategy protocol and the built-in strategies
// - `stage`: the display tree scenes are attached to, background tint,
//   input shield and resize debouncing
// - `tween`: the animation driver strategies schedule work on
// - `input`: normalized input events
// - `error`: the error taxonomy
//
// Notes:
// Everything runs on the host's thread. Asynchrony comes only from the
// navigator draining its event channel during `Navigator::update`.
//
//=========================================================================

pub mod error;
pub mod input;
pub mod nav;
pub mod scene;
pub mod stage;
pub mod transition;
pub mod tween;
