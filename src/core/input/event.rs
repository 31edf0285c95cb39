//=========================================================================
// Input Event Types
//
// Platform-independent input events routed by the navigator.
//
// Only what a presentation layer needs to forward to the top scene:
// navigation keys and a single pointer. Everything else maps to
// `Unidentified` and is still delivered, so scenes can ignore it.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputShield (drops while locked)
//         ↓
//    Top scene `on_input`
// ```
//
//=========================================================================

//=== PointerButton =======================================================

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse, touch contact).
    Primary,

    /// Secondary button (right mouse).
    Secondary,

    /// Middle button (wheel click).
    Middle,

    /// Side, thumb or macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key identifier, reduced to keys presentations react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Confirmation / cancellation --------------------------------------
    Enter,
    Space,
    Escape,
    Backspace,
    Tab,

    //--- Arrow keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Fallback ---------------------------------------------------------
    Unidentified,
}

//=== InputEvent ==========================================================

/// A single normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    PointerDown(PointerButton),
    PointerUp(PointerButton),
    PointerMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Discrete events change button state; pointer motion is continuous.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::PointerMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_motion_is_continuous() {
        assert!(!InputEvent::PointerMoved { x: 0.0, y: 0.0 }.is_discrete());
        assert!(InputEvent::KeyDown(KeyCode::Escape).is_discrete());
        assert!(InputEvent::PointerUp(PointerButton::Primary).is_discrete());
    }
}
