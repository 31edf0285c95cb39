//=========================================================================
// Input
//
// Normalized input events. The platform bridge produces them from winit
// window events; the navigator filters them through the stage's input
// shield and forwards the survivors to the top scene.
//
//=========================================================================

//=== Submodules ==========================================================
mod event;

//=== Public API ==========================================================
pub use event::{InputEvent, KeyCode, PointerButton};
