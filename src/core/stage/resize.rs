//=========================================================================
// Resize Debouncer
//
// Coalesces bursts of stage resize notifications (window drags produce
// dozens per second) into one rebuild once the stage has been quiet for
// the configured delay.
//
//=========================================================================

use std::time::Duration;

use super::StageSize;

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<StageSize>,
    quiet_for: Duration,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            quiet_for: Duration::ZERO,
        }
    }

    /// Records a resize; restarts the quiet period.
    pub fn notify(&mut self, size: StageSize) {
        self.pending = Some(size);
        self.quiet_for = Duration::ZERO;
    }

    /// Advances time; yields the latest size once the quiet period elapsed.
    pub fn tick(&mut self, dt: Duration) -> Option<StageSize> {
        self.pending?;
        self.quiet_for += dt;
        if self.quiet_for >= self.delay {
            self.quiet_for = Duration::ZERO;
            return self.pending.take();
        }
        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
