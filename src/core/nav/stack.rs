//=========================================================================
// Transition Stack
//=========================================================================
//
// Ordered history of presentations. The bottom entry is the root scene,
// the top entry is the one currently presented.
//
// Each entry references its scenes by instance id; the stage owns the
// scenes themselves. A reference whose scene has been retired is cleared
// (`None`) rather than left dangling.
//
// Deferred work requested while the navigator is locked is parked on the
// entry that will be on top once the in-flight transition completes:
//
//   None ─ reload ─> Reload{force} ─ destroy ─> Destroy{..}
//                      └─ reload ─> Reload{force_a || force_b}
//   Destroy ─ destroy ─> Destroy{callbacks chained}
//   Destroy ─ reload ──> Destroy (unchanged)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::mem;

//=== Internal Dependencies ===============================================

use super::Navigator;
use crate::core::scene::InstanceId;
use crate::core::transition::TransitionStrategy;

//=== Deferred Actions ====================================================

/// Callback run once a deferred or immediate teardown has finished.
pub type DestroyCallback = Box<dyn FnOnce(&mut Navigator)>;

/// A parked teardown request.
pub struct DestroyRequest {
    /// False clears the scene registry as well.
    pub reset: bool,
    pub callbacks: Vec<DestroyCallback>,
}

impl fmt::Debug for DestroyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestroyRequest")
            .field("reset", &self.reset)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// Work to run when an entry next finishes arriving.
#[derive(Debug, Default)]
pub enum PendingAction {
    #[default]
    None,
    Reload { force: bool },
    Destroy(DestroyRequest),
}

impl PendingAction {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    //--- merge() ----------------------------------------------------------
    //
    // Folds a new request into the parked one. A full teardown wins over
    // a reset, so `reset` is only kept when both requests ask for it.
    //
    pub fn merge(&mut self, incoming: PendingAction) {
        let current = mem::take(self);
        *self = match (current, incoming) {
            (current, Self::None) => current,
            (Self::None, incoming) => incoming,
            (Self::Reload { force: a }, Self::Reload { force: b }) => {
                Self::Reload { force: a || b }
            }
            (Self::Reload { .. }, destroy @ Self::Destroy(_)) => destroy,
            (destroy @ Self::Destroy(_), Self::Reload { .. }) => destroy,
            (Self::Destroy(mut first), Self::Destroy(second)) => {
                first.reset &= second.reset;
                first.callbacks.extend(second.callbacks);
                Self::Destroy(first)
            }
        };
    }

    /// Moves the parked action out, leaving `None`.
    pub fn take(&mut self) -> PendingAction {
        mem::take(self)
    }
}

//=== StackEntry ==========================================================

/// One presentation layer.
pub struct StackEntry {
    /// Presented scene; `None` once retired.
    pub scene: Option<InstanceId>,
    /// Scene this entry replaced or covers; cleared when no longer needed.
    pub scene_prev: Option<InstanceId>,
    pub is_modal: bool,
    pub is_transparent: bool,
    pub strategy: Box<dyn TransitionStrategy>,
    pub pending: PendingAction,
}

impl StackEntry {
    /// Modal and transparency flags are taken from the strategy and never
    /// change afterwards.
    pub fn new(
        scene: InstanceId,
        scene_prev: Option<InstanceId>,
        strategy: Box<dyn TransitionStrategy>,
    ) -> Self {
        Self {
            scene: Some(scene),
            scene_prev,
            is_modal: strategy.is_modal(),
            is_transparent: strategy.is_transparent(),
            strategy,
            pending: PendingAction::None,
        }
    }
}

impl fmt::Debug for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("scene", &self.scene)
            .field("scene_prev", &self.scene_prev)
            .field("strategy", &self.strategy.id())
            .field("is_modal", &self.is_modal)
            .field("is_transparent", &self.is_transparent)
            .field("pending", &self.pending)
            .finish()
    }
}

//=== TransitionStack =====================================================

#[derive(Debug, Default)]
pub struct TransitionStack {
    entries: Vec<StackEntry>,
}

impl TransitionStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StackEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut StackEntry> {
        self.entries.last_mut()
    }

    pub fn second_from_top(&self) -> Option<&StackEntry> {
        self.entries.len().checked_sub(2).and_then(|i| self.entries.get(i))
    }

    pub fn second_from_top_mut(&mut self) -> Option<&mut StackEntry> {
        let index = self.entries.len().checked_sub(2)?;
        self.entries.get_mut(index)
    }

    /// Removes the entry at `index` (0 = bottom).
    pub fn remove_at(&mut self, index: usize) -> Option<StackEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &StackEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut StackEntry> + ExactSizeIterator {
        self.entries.iter_mut()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::{JumpTransition, TransitionParams};
    use std::cell::Cell;
    use std::rc::Rc;

    fn entry(raw: u32, is_modal: bool) -> StackEntry {
        let params = TransitionParams::new("jump", None, is_modal);
        StackEntry::new(InstanceId::from_raw(raw), None, Box::new(JumpTransition::new(&params)))
    }

    fn destroy(reset: bool, hits: &Rc<Cell<u32>>) -> PendingAction {
        let hits = Rc::clone(hits);
        PendingAction::Destroy(DestroyRequest {
            reset,
            callbacks: vec![Box::new(move |_| hits.set(hits.get() + 1))],
        })
    }

    //--- PendingAction ----------------------------------------------------

    #[test]
    fn reloads_or_their_force_flag() {
        let mut pending = PendingAction::None;
        pending.merge(PendingAction::Reload { force: false });
        pending.merge(PendingAction::Reload { force: true });
        pending.merge(PendingAction::Reload { force: false });

        assert!(matches!(pending, PendingAction::Reload { force: true }));
    }

    #[test]
    fn destroy_outranks_reload_both_ways() {
        let hits = Rc::new(Cell::new(0));

        let mut a = PendingAction::Reload { force: true };
        a.merge(destroy(true, &hits));
        assert!(matches!(a, PendingAction::Destroy(_)));

        let mut b = destroy(true, &hits);
        b.merge(PendingAction::Reload { force: true });
        assert!(matches!(b, PendingAction::Destroy(_)));
    }

    #[test]
    fn destroys_chain_callbacks_and_full_teardown_wins() {
        let hits = Rc::new(Cell::new(0));
        let mut pending = destroy(true, &hits);
        pending.merge(destroy(false, &hits));

        match pending.take() {
            PendingAction::Destroy(request) => {
                assert!(!request.reset);
                assert_eq!(request.callbacks.len(), 2);
            }
            other => panic!("expected destroy, got {:?}", other),
        }
        assert!(pending.is_none());
    }

    //--- TransitionStack --------------------------------------------------

    #[test]
    fn entry_flags_come_from_strategy() {
        assert!(entry(1000000, true).is_modal);
        assert!(!entry(1000000, false).is_modal);
        assert!(!entry(1000000, true).is_transparent);
    }

    #[test]
    fn top_and_second_from_top() {
        let mut stack = TransitionStack::new();
        assert!(stack.top().is_none());
        assert!(stack.second_from_top().is_none());

        stack.push(entry(1000001, false));
        assert!(stack.second_from_top().is_none());

        stack.push(entry(1000002, true));
        assert_eq!(stack.top().and_then(|e| e.scene), Some(InstanceId::from_raw(1000002)));
        assert_eq!(
            stack.second_from_top().and_then(|e| e.scene),
            Some(InstanceId::from_raw(1000001))
        );
    }

    #[test]
    fn iter_walks_top_down_with_depth() {
        let mut stack = TransitionStack::new();
        stack.push(entry(1000001, false));
        stack.push(entry(1000002, true));

        let walked: Vec<_> = stack
            .iter()
            .enumerate()
            .rev()
            .map(|(depth, e)| (depth, e.scene))
            .collect();

        assert_eq!(
            walked,
            vec![
                (1, Some(InstanceId::from_raw(1000002))),
                (0, Some(InstanceId::from_raw(1000001))),
            ]
        );
        assert_eq!(stack.iter_mut().len(), 2);
    }

    #[test]
    fn remove_at_bounds() {
        let mut stack = TransitionStack::new();
        stack.push(entry(1000001, false));
        stack.push(entry(1000002, false));

        assert!(stack.remove_at(5).is_none());
        assert_eq!(
            stack.remove_at(0).and_then(|e| e.scene),
            Some(InstanceId::from_raw(1000001))
        );
        assert_eq!(stack.len(), 1);
    }
}
