//=========================================================================
// Navigation Handle
//=========================================================================
//
// Cloneable request sender for code that cannot borrow the navigator,
// chiefly scenes reacting to input inside their own hooks.
//
// Requests travel the same channel as ready/completion signals and are
// executed in order when `Navigator::update` drains it. Errors they
// produce surface from that `update` call.
//
//=========================================================================

use crossbeam_channel::Sender;
use log::warn;

use super::NavEvent;
use crate::core::scene::SceneData;

/// A navigation call recorded for later execution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavRequest {
    Open {
        scene_id: String,
        is_modal: bool,
        transition_id: Option<String>,
        data: Option<SceneData>,
    },
    Dismiss {
        data: Option<SceneData>,
    },
    Reload {
        force: bool,
    },
}

/// Posts navigation requests to a [`Navigator`](super::Navigator).
///
/// Obtained from [`Navigator::handle`](super::Navigator::handle); usually
/// captured by scene factories so scenes can navigate on input.
#[derive(Debug, Clone)]
pub struct NavHandle {
    tx: Sender<NavEvent>,
}

impl NavHandle {
    pub(crate) fn new(tx: Sender<NavEvent>) -> Self {
        Self { tx }
    }

    /// Queues [`Navigator::open_scene`](super::Navigator::open_scene).
    pub fn open_scene(
        &self,
        scene_id: impl Into<String>,
        is_modal: bool,
        transition_id: Option<&str>,
        data: Option<SceneData>,
    ) {
        self.post(NavRequest::Open {
            scene_id: scene_id.into(),
            is_modal,
            transition_id: transition_id.map(str::to_owned),
            data,
        });
    }

    /// Queues [`Navigator::dismiss_scene`](super::Navigator::dismiss_scene).
    pub fn dismiss_scene(&self, data: Option<SceneData>) {
        self.post(NavRequest::Dismiss { data });
    }

    /// Queues [`Navigator::reload_scene_stack`](super::Navigator::reload_scene_stack).
    pub fn reload_scene_stack(&self, force: bool) {
        self.post(NavRequest::Reload { force });
    }

    fn post(&self, request: NavRequest) {
        if let Err(err) = self.tx.send(NavEvent::Request(request)) {
            warn!("Navigation request dropped: navigator is gone ({:?})", err.into_inner());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn requests_are_posted_in_order() {
        let (tx, rx) = unbounded();
        let handle = NavHandle::new(tx);

        handle.open_scene("play", true, Some("over:left"), None);
        handle.clone().dismiss_scene(None);

        assert_eq!(
            rx.try_recv(),
            Ok(NavEvent::Request(NavRequest::Open {
                scene_id: "play".into(),
                is_modal: true,
                transition_id: Some("over:left".into()),
                data: None,
            }))
        );
        assert_eq!(rx.try_recv(), Ok(NavEvent::Request(NavRequest::Dismiss { data: None })));
    }

    #[test]
    fn posting_without_navigator_does_not_panic() {
        let (tx, rx) = unbounded();
        drop(rx);
        NavHandle::new(tx).reload_scene_stack(true);
    }
}
