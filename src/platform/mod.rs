//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level window events) with the navigator.
//
// Architecture:
// ```text
//  Host application (owns the Winit event loop)
//   ↓ WindowEvent
//  Navigator::handle_window_event()
//   ↓
//  event_mapper::map_window_event()
//   ├─ Input(InputEvent)   → InputShield → top scene
//   └─ Resized(StageSize)  → ResizeDebouncer → relayout + reload
// ```
//
// The navigator never creates windows or runs the event loop itself; the
// host forwards events and calls `Navigator::update` once per frame.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::stage::StageSize;

pub(crate) use event_mapper::map_window_event;

//=== StageEvent ==========================================================

/// Window events the navigator cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StageEvent {
    /// Keyboard or pointer input for the top scene.
    Input(InputEvent),

    /// New drawable size in physical pixels.
    Resized(StageSize),
}
