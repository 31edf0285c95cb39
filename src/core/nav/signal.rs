//=========================================================================
// Navigation Signals
//=========================================================================
//
// One-shot tokens handed to collaborators (scenes, tween timelines) that
// report back to the navigator through a crossbeam channel.
//
// Flow:
//   Scene::prepare(ReadySignal) ── signal() ──┐
//                                             ├──> NavEvent ──> Navigator::process_events()
//   Timeline(.., Completion) ───── fire() ────┤
//   NavHandle ─────────────── open_scene() ───┘
//
// Both tokens are consumed by value, so each can fire at most once. The
// navigator drains the channel at tick boundaries, which keeps every
// completion asynchronous relative to the call that scheduled it.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::handle::NavRequest;
use crate::core::scene::InstanceId;

//=== NavEvent ============================================================

/// Which half of a transition finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// Entrance animation (`perform_in`).
    Arrival,
    /// Exit animation (`perform_out`).
    Departure,
}

/// Messages posted back to the navigator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavEvent {
    /// A freshly constructed scene finished its setup.
    SceneReady(InstanceId),

    /// A transition strategy's animation completed.
    TransitionFinished { ticket: u64, kind: CompletionKind },

    /// Navigation call queued through a [`NavHandle`](super::NavHandle).
    Request(NavRequest),
}

//=== ReadySignal =========================================================

/// Readiness token given to every new scene.
///
/// Scenes are attached invisible and no transition starts until this is
/// signalled. Store it if setup is incremental and signal later from
/// [`Scene::update`](crate::core::scene::Scene::update).
#[derive(Debug)]
pub struct ReadySignal {
    instance: InstanceId,
    tx: Sender<NavEvent>,
}

impl ReadySignal {
    pub(crate) fn new(instance: InstanceId, tx: Sender<NavEvent>) -> Self {
        Self { instance, tx }
    }

    /// Instance this token belongs to.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Announces that the scene is ready to be transitioned in.
    pub fn signal(self) {
        if self.tx.send(NavEvent::SceneReady(self.instance)).is_err() {
            warn!("Ready signal for {} dropped: navigator is gone", self.instance);
        }
    }
}

//=== Completion ==========================================================

/// Completion token for one transition animation.
///
/// Strategies must fire it exactly once when their animation has finished,
/// typically by handing it to [`Timeline::signal`](crate::core::tween::Timeline::signal).
#[derive(Debug)]
pub struct Completion {
    ticket: u64,
    kind: CompletionKind,
    tx: Sender<NavEvent>,
}

impl Completion {
    pub(crate) fn new(ticket: u64, kind: CompletionKind, tx: Sender<NavEvent>) -> Self {
        Self { ticket, kind, tx }
    }

    /// Which half of the transition this completes.
    pub fn kind(&self) -> CompletionKind {
        self.kind
    }

    /// Reports the animation as finished.
    pub fn fire(self) {
        let event = NavEvent::TransitionFinished {
            ticket: self.ticket,
            kind: self.kind,
        };
        if self.tx.send(event).is_err() {
            warn!("Completion {:?}#{} dropped: navigator is gone", self.kind, self.ticket);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn ready_signal_posts_scene_ready() {
        let (tx, rx) = unbounded();
        let id = InstanceId::from_raw(1234567);

        ReadySignal::new(id, tx).signal();

        assert_eq!(rx.try_recv(), Ok(NavEvent::SceneReady(id)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn completion_carries_ticket_and_kind() {
        let (tx, rx) = unbounded();

        let done = Completion::new(7, CompletionKind::Departure, tx);
        assert_eq!(done.kind(), CompletionKind::Departure);
        done.fire();

        assert_eq!(
            rx.try_recv(),
            Ok(NavEvent::TransitionFinished {
                ticket: 7,
                kind: CompletionKind::Departure
            })
        );
    }

    #[test]
    fn firing_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = unbounded();
        drop(rx);
        Completion::new(1, CompletionKind::Arrival, tx).fire();
    }
}
