//=========================================================================
// Input Shield
//
// Full-stage overlay that swallows all input while a transition is in
// flight. Raised and lowered by the navigator together with its lock.
//
//=========================================================================

use log::trace;

use crate::core::input::InputEvent;

//=== InputShield =========================================================

#[derive(Debug, Default)]
pub struct InputShield {
    raised: bool,
    swallowed: u64,
}

impl InputShield {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Toggling ---------------------------------------------------------

    pub fn raise(&mut self) {
        self.raised = true;
    }

    pub fn lower(&mut self) {
        self.raised = false;
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    //--- intercept() ------------------------------------------------------
    //
    // Returns true if the event was swallowed and must not reach a scene.
    //
    pub fn intercept(&mut self, event: &InputEvent) -> bool {
        if self.raised {
            self.swallowed += 1;
            trace!("Input shield swallowed {:?}", event);
        }
        self.raised
    }

    /// Events swallowed since creation.
    pub fn swallowed(&self) -> u64 {
        self.swallowed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
