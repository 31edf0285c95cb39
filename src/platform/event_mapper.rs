//=========================================================================
// Platform Event Mapper
//
// Converts Winit window events to navigator-level `StageEvent`s.
// Provides a clean separation between OS-specific input and the
// navigator's internal event representation.
//
// Responsibilities:
// - Translate keyboard and pointer events into `InputEvent`s
// - Report window resizes as stage sizes
// - Ignore unsupported or irrelevant Winit events
// - Provide fallbacks (`Unidentified`, `Other`) for unmapped inputs
//
//=========================================================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use super::StageEvent;
use crate::core::input::{InputEvent, KeyCode, PointerButton};
use crate::core::stage::StageSize;

//=== Key Conversion ======================================================
//
// Only keys a presentation reacts to are distinguished; everything else
// maps to `Unidentified` and is still delivered.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Confirmation / cancellation ------------------------------
            Enter | NumpadEnter => KeyCode::Enter,
            Space => KeyCode::Space,
            Escape => KeyCode::Escape,
            Backspace => KeyCode::Backspace,
            Tab => KeyCode::Tab,

            //--- Arrow keys -----------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Fallback -------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Pointer Conversion ==================================================

impl From<WinitMouseButton> for PointerButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => PointerButton::Primary,
            WinitMouseButton::Right => PointerButton::Secondary,
            WinitMouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

//=== Full Event Conversion ===============================================
//
// Notes:
// - `KeyboardInput` becomes `KeyDown`/`KeyUp`; auto-repeats are dropped
//   so a held key cannot re-trigger navigation.
// - `MouseInput` becomes `PointerDown`/`PointerUp`.
// - `CursorMoved` maps to `PointerMoved`.
// - `Resized` to a zero area (minimised window) is ignored.
//

pub(crate) fn map_window_event(event: &WindowEvent) -> Option<StageEvent> {
    match event {
        //--- Keyboard Input ----------------------------------------------
        WindowEvent::KeyboardInput {
            event: KeyEvent { physical_key, state, repeat, .. },
            ..
        } => {
            if *repeat {
                return None;
            }
            let key = match physical_key {
                PhysicalKey::Code(code) => KeyCode::from(*code),
                _ => KeyCode::Unidentified,
            };
            Some(StageEvent::Input(match state {
                ElementState::Pressed => InputEvent::KeyDown(key),
                ElementState::Released => InputEvent::KeyUp(key),
            }))
        }

        //--- Pointer Buttons ---------------------------------------------
        WindowEvent::MouseInput { state, button, .. } => {
            let button = PointerButton::from(*button);
            Some(StageEvent::Input(match state {
                ElementState::Pressed => InputEvent::PointerDown(button),
                ElementState::Released => InputEvent::PointerUp(button),
            }))
        }

        //--- Pointer Movement --------------------------------------------
        WindowEvent::CursorMoved { position, .. } => {
            Some(StageEvent::Input(InputEvent::PointerMoved {
                x: position.x as f32,
                y: position.y as f32,
            }))
        }

        //--- Stage Size --------------------------------------------------
        WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
            Some(StageEvent::Resized(StageSize::new(size.width, size.height)))
        }

        //--- Unhandled Events --------------------------------------------
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn keys_outside_the_navigation_set_are_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Unidentified);
    }

    #[test]
    fn mouse_buttons_map_to_pointer_buttons() {
        assert_eq!(PointerButton::from(WinitMouseButton::Left), PointerButton::Primary);
        assert_eq!(PointerButton::from(WinitMouseButton::Back), PointerButton::Other);
    }

    #[test]
    fn resize_maps_to_stage_size() {
        let event = WindowEvent::Resized(PhysicalSize::new(1024, 768));
        assert_eq!(
            map_window_event(&event),
            Some(StageEvent::Resized(StageSize::new(1024, 768)))
        );
    }

    #[test]
    fn minimised_resize_is_ignored() {
        let event = WindowEvent::Resized(PhysicalSize::new(0, 0));
        assert_eq!(map_window_event(&event), None);
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(map_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(map_window_event(&WindowEvent::CloseRequested), None);
    }
}
