//=========================================================================
// Scene Navigator
//=========================================================================
//
// The navigation state machine: a stack of presentation layers, a lock
// that keeps at most one transition in flight, a pending-modal slot and
// deferred reload/destroy work.
//
// Architecture:
//   Navigator
//     ├─ scenes: SceneRegistry          (set once, cleared by destroy)
//     ├─ transitions: TransitionRegistry
//     ├─ stack: TransitionStack         (bottom = root, top = presented)
//     ├─ pending_modal: Option<StackEntry>
//     ├─ phase: NavPhase                (locked ⇔ phase != Idle)
//     ├─ stage: Stage                   (owns scenes, background, shield)
//     ├─ tweens: Tweener
//     └─ events: crossbeam channel      (ready, finished, requests)
//
// Phases:
//   Idle ── open_scene ──> AwaitingReady ── ready ──> Arriving ── done ──> Idle
//   Idle ── dismiss_scene ───────────────────────────> Departing ── done ──> Idle
//
// Every arriving/departing animation carries a ticket; completions whose
// ticket does not match the current phase are stale and ignored.
//
// Calls made while locked are either dropped (`open_scene`,
// `dismiss_scene`) or parked on the entry that will be on top once the
// transition completes (`reload_scene_stack`, `destroy`).
//
//=========================================================================

//=== Module Declarations =================================================

mod handle;
mod signal;
mod stack;

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event::WindowEvent;

//=== Internal Dependencies ===============================================

use crate::builder::NavigatorSettings;
use crate::core::error::{ConfigurationError, InvalidStateError, NavError};
use crate::core::input::InputEvent;
use crate::core::scene::{
    merge_scene_data, sanitize_scene_data, InstanceId, Scene, SceneData, SceneRegistry,
};
use crate::core::stage::{ResizeDebouncer, SceneNode, Stage, StageSize};
use crate::core::transition::{
    StackView, TransitionContext, TransitionParams, TransitionRegistry, TransitionSpec,
    TransitionStrategy,
};
use crate::core::tween::Tweener;
use crate::platform::{map_window_event, StageEvent};

//=== Public API ==========================================================

pub use handle::NavHandle;
pub use signal::{Completion, CompletionKind, ReadySignal};
pub use stack::{DestroyCallback, DestroyRequest, PendingAction, StackEntry, TransitionStack};

pub(crate) use handle::NavRequest;
pub(crate) use signal::NavEvent;

/// Transition used when the stack is rebuilt.
pub const RELOAD_TRANSITION: &str = "fade";

//=== NavPhase ============================================================

/// Where the navigator is in its single in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPhase {
    #[default]
    Idle,
    /// New scene attached, waiting for its ready signal.
    AwaitingReady { instance: InstanceId },
    /// Entrance animation running.
    Arriving { ticket: u64 },
    /// Modal exit animation running.
    Departing { ticket: u64 },
}

//=== Navigator ===========================================================

/// Scene navigation and transition orchestrator.
///
/// Create one with [`NavigatorBuilder`](crate::NavigatorBuilder), install a
/// [`SceneRegistry`], then drive it from the host loop:
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_stage::prelude::*;
///
/// struct Title;
/// impl Scene for Title {}
///
/// let scenes = SceneRegistry::new()
///     .with("title", SceneConfig::new(|_| Title).as_default())
///     .unwrap();
///
/// let mut navigator = NavigatorBuilder::new().with_scenes(scenes).build();
/// navigator.start().unwrap();
///
/// while navigator.is_locked() {
///     navigator.update(Duration::from_millis(16)).unwrap();
/// }
/// assert_eq!(navigator.top_scene_id(), Some("title"));
/// ```
pub struct Navigator {
    scenes: Option<SceneRegistry>,
    transitions: TransitionRegistry,
    default_transition: String,

    stack: TransitionStack,
    pending_modal: Option<StackEntry>,
    phase: NavPhase,
    next_ticket: u64,

    stage: Stage,
    tweens: Tweener,
    resize: ResizeDebouncer,
    rng: StdRng,

    events_tx: Sender<NavEvent>,
    events_rx: Receiver<NavEvent>,

    trace_stack: bool,
}

impl Navigator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn from_settings(settings: NavigatorSettings) -> Self {
        let (events_tx, events_rx) = unbounded();
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            scenes: settings.scenes,
            transitions: settings.transitions,
            default_transition: settings.default_transition,
            stack: TransitionStack::new(),
            pending_modal: None,
            phase: NavPhase::Idle,
            next_ticket: 0,
            stage: Stage::new(settings.stage_size, settings.background),
            tweens: Tweener::new(),
            resize: ResizeDebouncer::new(settings.resize_debounce),
            rng,
            events_tx,
            events_rx,
            trace_stack: settings.trace_stack,
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Installs the scene registry. Must happen once before navigating.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ScenesAlreadySet`] if a registry is installed;
    /// a permanent [`destroy`](Self::destroy) clears it.
    pub fn set_scenes(&mut self, scenes: SceneRegistry) -> Result<(), NavError> {
        if self.scenes.is_some() {
            return Err(ConfigurationError::ScenesAlreadySet.into());
        }
        info!("Scene registry installed ({} scenes)", scenes.len());
        self.scenes = Some(scenes);
        Ok(())
    }

    /// Registers a custom strategy under one or more ids.
    pub fn register_transition<F>(&mut self, ids: &[&str], factory: F)
    where
        F: Fn(&TransitionParams) -> Box<dyn TransitionStrategy> + 'static,
    {
        self.transitions.register(ids, factory);
    }

    /// Request sender usable from inside scenes.
    pub fn handle(&self) -> NavHandle {
        NavHandle::new(self.events_tx.clone())
    }

    //--- start() ----------------------------------------------------------

    /// Opens the registry's default scene with its default transition.
    pub fn start(&mut self) -> Result<(), NavError> {
        let scenes = self.scenes.as_ref().ok_or(ConfigurationError::ScenesNotSet)?;
        let scene_id = scenes
            .default_scene()
            .ok_or(ConfigurationError::NoDefaultScene)?
            .to_owned();
        self.open_scene(&scene_id, false, None, None)
    }

    //--- open_scene() -----------------------------------------------------
    //
    // Validation runs before the lock is taken, so a configuration error
    // leaves the navigator exactly as it was. Once locked nothing can fail.
    //
    // Transition resolution: explicit id, then the scene's configured
    // default, then the navigator default.
    //
    pub fn open_scene(
        &mut self,
        scene_id: &str,
        is_modal: bool,
        transition_id: Option<&str>,
        data: Option<SceneData>,
    ) -> Result<(), NavError> {
        if self.is_locked() {
            debug!("Dropping open_scene({:?}): navigation in progress", scene_id);
            return Ok(());
        }

        //--- 1. Validate --------------------------------------------------
        let scenes = self.scenes.as_ref().ok_or(ConfigurationError::ScenesNotSet)?;
        let config = scenes
            .get(scene_id)
            .ok_or_else(|| ConfigurationError::UnknownScene(scene_id.to_owned()))?;

        let transition = transition_id
            .or(config.default_transition())
            .unwrap_or(self.default_transition.as_str());
        let spec = TransitionSpec::parse(transition);
        let params = TransitionParams::new(spec.id, spec.config, is_modal);
        let strategy = self
            .transitions
            .create(&params)
            .ok_or_else(|| ConfigurationError::UnknownTransition(params.transition_id.clone()))?;

        //--- 2. Lock ------------------------------------------------------
        let instance = loop {
            let candidate = InstanceId::generate(&mut self.rng);
            if !self.stage.contains(candidate) {
                break candidate;
            }
        };
        self.phase = NavPhase::AwaitingReady { instance };
        self.stage.shield_mut().raise();

        //--- 3. Construct -------------------------------------------------
        let scene_data = merge_scene_data(config.data(), data.as_ref(), scene_id, instance);
        let scene = config.build(&scene_data);
        let background = scene.background_color().or(config.background());

        debug!(
            "Opening {} ({}) via {} (modal: {})",
            scene_id, instance, transition, is_modal
        );

        //--- 4. Collapse and push -----------------------------------------
        let scene_prev = self.stack.top().and_then(|entry| entry.scene);
        let entry = StackEntry::new(instance, scene_prev, strategy);

        if !entry.is_modal && self.stack.len() > 1 {
            if let Some(removed) = self.stack.pop() {
                if removed.is_modal {
                    debug!("Parking modal layer {:?} until {} arrives", removed.scene, instance);
                    self.pending_modal = Some(removed);
                }
            }
        }
        self.stack.push(entry);

        //--- 5. Attach and wait for readiness -----------------------------
        self.stage
            .attach(SceneNode::new(scene_id, instance, scene_data, background, scene));
        let ready = ReadySignal::new(instance, self.events_tx.clone());
        self.with_scene(Some(instance), |scene| scene.prepare(ready));

        self.debug_trans_stack();
        Ok(())
    }

    //--- dismiss_scene() --------------------------------------------------

    /// Animates the top modal away and returns to the scene beneath it.
    ///
    /// `data` is handed to the revealed scene's `on_will_arrive`.
    ///
    /// # Errors
    ///
    /// [`InvalidStateError::NotPresentingModal`] unless
    /// [`is_presenting_modal`](Self::is_presenting_modal) holds. Calls made
    /// while locked are dropped without error.
    pub fn dismiss_scene(&mut self, data: Option<SceneData>) -> Result<(), NavError> {
        if self.is_locked() {
            debug!("Dropping dismiss_scene(): navigation in progress");
            return Ok(());
        }
        if !self.is_presenting_modal() {
            return Err(InvalidStateError::NotPresentingModal.into());
        }
        let (scene, scene_prev) = match self.stack.top() {
            Some(StackEntry { scene: Some(scene), scene_prev, .. }) => (*scene, *scene_prev),
            _ => return Err(InvalidStateError::NotPresentingModal.into()),
        };

        let ticket = self.issue_ticket();
        self.phase = NavPhase::Departing { ticket };
        self.stage.shield_mut().raise();
        debug!("Dismissing modal {} back to {:?}", scene, scene_prev);

        self.with_scene(Some(scene), |s| s.on_will_exit(false));
        self.with_scene(scene_prev, |s| s.on_will_arrive(true, data.as_ref()));

        let done = Completion::new(ticket, CompletionKind::Departure, self.events_tx.clone());
        self.perform(scene, scene_prev, done);
        Ok(())
    }

    //--- reload_scene_stack() ---------------------------------------------
    //
    // Buried entries cannot be rebuilt while covered, so those that accept
    // reloading are hidden and flagged to rebuild on their next arrival.
    // The top entry is replaced by a fresh instance of the same scene.
    //
    pub fn reload_scene_stack(&mut self, force: bool) -> Result<(), NavError> {
        if self.is_locked() {
            debug!("Deferring reload (force: {}) until the current transition ends", force);
            self.defer(PendingAction::Reload { force });
            return Ok(());
        }

        let buried = self.stack.len().saturating_sub(1);
        for entry in self.stack.iter_mut().take(buried) {
            let Some(id) = entry.scene else { continue };
            let wants = self
                .stage
                .node(id)
                .is_some_and(|node| node.scene().should_reload_on_resize());
            if wants {
                if let Some(visual) = self.stage.visual_mut(id) {
                    visual.visible = false;
                }
                entry.pending.merge(PendingAction::Reload { force: true });
            }
        }

        let Some(node) = self.top_instance().and_then(|id| self.stage.node(id)) else {
            return Ok(());
        };
        if !force && !node.scene().should_reload_on_resize() {
            return Ok(());
        }

        let scene_id = node.scene_id().to_owned();
        let data = sanitize_scene_data(node.data());
        debug!("Reloading {} ({})", scene_id, node.instance());
        self.open_scene(&scene_id, false, Some(RELOAD_TRANSITION), Some(data))
    }

    //--- destroy() --------------------------------------------------------

    /// Tears down every scene on the stack, then runs `callback`.
    ///
    /// With `reset = false` the scene registry is cleared too, so
    /// [`set_scenes`](Self::set_scenes) may be called again. While locked
    /// the teardown is parked until the in-flight transition completes.
    pub fn destroy<F>(&mut self, reset: bool, callback: F)
    where
        F: FnOnce(&mut Navigator) + 'static,
    {
        let request = DestroyRequest {
            reset,
            callbacks: vec![Box::new(callback)],
        };
        if self.is_locked() {
            debug!("Deferring destroy (reset: {}) until the current transition ends", reset);
            self.defer(PendingAction::Destroy(request));
            return;
        }
        self.destroy_now(request);
    }

    fn destroy_now(&mut self, request: DestroyRequest) {
        info!(
            "Tearing down {} stack entries (reset: {})",
            self.stack.len(),
            request.reset
        );

        while let Some(entry) = self.stack.pop() {
            if let Some(id) = entry.scene {
                self.with_scene(Some(id), |scene| {
                    scene.on_will_exit(false);
                    scene.on_did_exit(false);
                });
                self.retire(id);
            }
        }
        self.pending_modal = None;
        for node in self.stage.detach_all() {
            node.dispose();
        }

        self.tweens.clear();
        self.phase = NavPhase::Idle;
        self.stage.shield_mut().lower();
        if !request.reset {
            self.scenes = None;
        }

        self.debug_trans_stack();
        for callback in request.callbacks {
            callback(&mut *self);
        }
    }

    //--- Host Loop --------------------------------------------------------

    /// Advances the navigator by one host tick.
    ///
    /// Order: scene updates, animations, resize debounce, then queued
    /// ready/completion signals and handle requests.
    pub fn update(&mut self, dt: Duration) -> Result<(), NavError> {
        self.stage.update_scenes(dt);
        self.tweens.tick(dt, &mut self.stage);

        if let Some(size) = self.resize.tick(dt) {
            self.stage.resize(size);
            self.reload_scene_stack(false)?;
        }

        self.process_events()
    }

    /// Feeds a winit window event. Returns true if the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match map_window_event(event) {
            Some(StageEvent::Input(input)) => self.dispatch_input(input),
            Some(StageEvent::Resized(size)) => {
                self.notify_resize(size);
                true
            }
            None => false,
        }
    }

    /// Routes input to the top scene unless the shield is raised.
    ///
    /// Returns true if a scene received the event.
    pub fn dispatch_input(&mut self, event: InputEvent) -> bool {
        if self.stage.shield_mut().intercept(&event) {
            return false;
        }
        match self.top_instance().and_then(|id| self.stage.scene_mut(id)) {
            Some(scene) => {
                scene.on_input(&event);
                true
            }
            None => false,
        }
    }

    /// Records a stage size change; applied once resizing goes quiet.
    pub fn notify_resize(&mut self, size: StageSize) {
        self.resize.notify(size);
    }

    //--- process_events() -------------------------------------------------
    //
    // Drains the channel completely. Signals that no longer match the
    // current phase are logged and dropped.
    //
    fn process_events(&mut self) -> Result<(), NavError> {
        loop {
            let event = match self.events_rx.try_recv() {
                Ok(event) => event,
                Err(_) => return Ok(()),
            };

            match (event, self.phase) {
                (NavEvent::SceneReady(id), NavPhase::AwaitingReady { instance })
                    if id == instance =>
                {
                    self.on_scene_ready(instance);
                }
                (NavEvent::SceneReady(id), _) => {
                    debug!("Ignoring stale ready signal from {}", id);
                }
                (
                    NavEvent::TransitionFinished { ticket, kind: CompletionKind::Arrival },
                    NavPhase::Arriving { ticket: current },
                ) if ticket == current => self.on_scene_in()?,
                (
                    NavEvent::TransitionFinished { ticket, kind: CompletionKind::Departure },
                    NavPhase::Departing { ticket: current },
                ) if ticket == current => self.on_scene_out()?,
                (NavEvent::TransitionFinished { ticket, kind }, phase) => {
                    warn!("Ignoring stale {:?} completion #{} during {:?}", kind, ticket, phase);
                }
                (NavEvent::Request(request), _) => self.execute(request)?,
            }
        }
    }

    fn execute(&mut self, request: NavRequest) -> Result<(), NavError> {
        match request {
            NavRequest::Open { scene_id, is_modal, transition_id, data } => {
                self.open_scene(&scene_id, is_modal, transition_id.as_deref(), data)
            }
            NavRequest::Dismiss { data } => self.dismiss_scene(data),
            NavRequest::Reload { force } => self.reload_scene_stack(force),
        }
    }

    //--- Completion Handlers ----------------------------------------------

    fn on_scene_ready(&mut self, instance: InstanceId) {
        let Some(top) = self.stack.top() else {
            warn!("Scene {} became ready with an empty stack", instance);
            return;
        };
        let (scene_prev, is_modal) = (top.scene_prev, top.is_modal);
        debug!("Scene {} ready, transitioning in", instance);

        self.with_scene(scene_prev, |s| s.on_will_exit(is_modal));
        self.with_scene(Some(instance), |s| s.on_will_arrive(false, None));

        let ticket = self.issue_ticket();
        self.phase = NavPhase::Arriving { ticket };
        let done = Completion::new(ticket, CompletionKind::Arrival, self.events_tx.clone());
        self.perform(instance, scene_prev, done);
    }

    //--- on_scene_in() ----------------------------------------------------
    //
    // 1. retire the replaced scene (non-modal only) and compact the stack
    // 2. restore a parked modal layer around the arrived scene
    // 3. unlock, announce arrival, run deferred work
    //
    fn on_scene_in(&mut self) -> Result<(), NavError> {
        let Some(top) = self.stack.top() else {
            self.unlock();
            return Ok(());
        };
        let (scene_prev, is_modal) = (top.scene_prev, top.is_modal);

        if let Some(prev) = scene_prev {
            self.with_scene(Some(prev), |s| s.on_did_exit(is_modal));

            if !is_modal {
                self.retire(prev);
                if let Some(top) = self.stack.top_mut() {
                    top.scene_prev = None;
                }
                if self.stack.second_from_top().is_some_and(|e| e.scene == Some(prev)) {
                    let index = self.stack.len() - 2;
                    if let Some(removed) = self.stack.remove_at(index) {
                        debug!("Compacted redundant stack entry for {}", prev);
                        self.inherit_destroy(removed.pending);
                    }
                }
                self.scrub(prev);
            }
        }

        if let Some(mut parked) = self.pending_modal.take() {
            if let Some(arrived) = self.stack.pop() {
                debug!("Restoring modal layer around {:?}", arrived.scene);
                parked.scene = arrived.scene;
                parked.is_transparent &= arrived.is_transparent;
                parked.pending.merge(arrived.pending);
            }
            self.stack.push(parked);
        }

        self.unlock();

        let (scene, is_modal) = match self.stack.top() {
            Some(top) => (top.scene, top.is_modal),
            None => (None, false),
        };
        self.with_scene(scene, |s| s.on_did_arrive(is_modal, None));

        self.debug_trans_stack();
        self.check_for_next_arrive_events()
    }

    fn on_scene_out(&mut self) -> Result<(), NavError> {
        if let Some(entry) = self.stack.pop() {
            if let Some(id) = entry.scene {
                self.with_scene(Some(id), |s| s.on_did_exit(false));
                self.retire(id);
                self.scrub(id);
            }
            self.inherit_destroy(entry.pending);
        }

        self.unlock();

        let scene = self.top_instance();
        self.with_scene(scene, |s| s.on_did_arrive(true, None));

        self.debug_trans_stack();
        self.check_for_next_arrive_events()
    }

    //--- check_for_next_arrive_events() -----------------------------------
    //
    // Destroy takes priority over reload; the merge rules already dropped
    // any reload parked alongside a destroy.
    //
    fn check_for_next_arrive_events(&mut self) -> Result<(), NavError> {
        let pending = match self.stack.top_mut() {
            Some(top) => top.pending.take(),
            None => return Ok(()),
        };
        match pending {
            PendingAction::None => Ok(()),
            PendingAction::Destroy(request) => {
                self.destroy_now(request);
                Ok(())
            }
            PendingAction::Reload { force } => self.reload_scene_stack(force),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn unlock(&mut self) {
        self.phase = NavPhase::Idle;
        self.stage.shield_mut().lower();
    }

    /// Entry that will be on top once the in-flight transition completes.
    fn defer(&mut self, action: PendingAction) {
        let target = match self.phase {
            NavPhase::Departing { .. } => self.stack.second_from_top_mut(),
            _ => self.stack.top_mut(),
        };
        match target {
            Some(entry) => entry.pending.merge(action),
            None => warn!("Nothing on the stack to defer {:?} to; dropped", action),
        }
    }

    /// Moves a teardown parked on a removed entry onto the current top.
    fn inherit_destroy(&mut self, pending: PendingAction) {
        if let PendingAction::Destroy(_) = pending {
            match self.stack.top_mut() {
                Some(top) => top.pending.merge(pending),
                None => warn!("Dropping orphaned teardown request {:?}", pending),
            }
        }
    }

    fn perform(&mut self, scene: InstanceId, scene_prev: Option<InstanceId>, done: Completion) {
        let view = self.stack_view();
        let kind = done.kind();
        let Some(top) = self.stack.top_mut() else { return };
        let mut ctx = TransitionContext {
            scene,
            scene_prev,
            stage: &mut self.stage,
            tweens: &mut self.tweens,
            stack: view,
        };
        match kind {
            CompletionKind::Arrival => top.strategy.perform_in(&mut ctx, done),
            CompletionKind::Departure => top.strategy.perform_out(&mut ctx, done),
        }
    }

    fn with_scene(&mut self, instance: Option<InstanceId>, hook: impl FnOnce(&mut dyn Scene)) {
        if let Some(scene) = instance.and_then(|id| self.stage.scene_mut(id)) {
            hook(scene);
        }
    }

    /// Detaches and disposes a scene.
    fn retire(&mut self, instance: InstanceId) {
        if let Some(node) = self.stage.detach(instance) {
            debug!("Retiring {} ({})", node.scene_id(), instance);
            node.dispose();
        }
    }

    /// Clears every stack reference to a retired scene.
    fn scrub(&mut self, instance: InstanceId) {
        for entry in self.stack.iter_mut() {
            if entry.scene == Some(instance) {
                entry.scene = None;
            }
            if entry.scene_prev == Some(instance) {
                entry.scene_prev = None;
            }
        }
    }

    fn stack_view(&self) -> StackView {
        StackView {
            presenting_modal: self.is_presenting_modal(),
            presented_modally: self.is_scene_presented_modally(),
            transparent_bg: self.is_scene_presented_with_transparent_bg(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_locked(&self) -> bool {
        self.phase != NavPhase::Idle
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Depth ≥ 2, top is modal and still covers a previous scene.
    pub fn is_presenting_modal(&self) -> bool {
        self.stack.len() >= 2
            && self
                .stack
                .top()
                .is_some_and(|top| top.is_modal && top.scene_prev.is_some())
    }

    pub fn is_scene_presented_modally(&self) -> bool {
        self.stack.top().is_some_and(|top| top.is_modal)
    }

    pub fn is_scene_presented_with_transparent_bg(&self) -> bool {
        self.stack.top().is_some_and(|top| top.is_transparent)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn has_pending_modal(&self) -> bool {
        self.pending_modal.is_some()
    }

    pub fn top_instance(&self) -> Option<InstanceId> {
        self.stack.top().and_then(|top| top.scene)
    }

    /// Registry id of the presented scene.
    pub fn top_scene_id(&self) -> Option<&str> {
        self.top_instance()
            .and_then(|id| self.stage.node(id))
            .map(SceneNode::scene_id)
    }

    /// Registry ids along the stack, bottom to top.
    pub fn scene_ids(&self) -> Vec<&str> {
        self.stack
            .iter()
            .filter_map(|entry| entry.scene)
            .filter_map(|id| self.stage.node(id))
            .map(SceneNode::scene_id)
            .collect()
    }

    pub fn stack(&self) -> &TransitionStack {
        &self.stack
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn scenes(&self) -> Option<&SceneRegistry> {
        self.scenes.as_ref()
    }

    pub fn transitions(&self) -> &TransitionRegistry {
        &self.transitions
    }

    //--- debug_trans_stack() ----------------------------------------------

    /// Logs the stack top-down at debug level when tracing is enabled.
    pub fn debug_trans_stack(&self) {
        if !self.trace_stack {
            return;
        }
        debug!("Transition stack ({} entries, {:?}):", self.stack.len(), self.phase);
        for (depth, entry) in self.stack.iter().enumerate().rev() {
            let name = entry
                .scene
                .and_then(|id| self.stage.node(id))
                .map_or("<retired>", SceneNode::scene_id);
            debug!(
                "  [{}] {} {:?} via {} modal={} transparent={} prev={:?} pending={:?}",
                depth,
                name,
                entry.scene,
                entry.strategy.id(),
                entry.is_modal,
                entry.is_transparent,
                entry.scene_prev,
                entry.pending
            );
        }
        if let Some(parked) = &self.pending_modal {
            debug!("  parked: {:?}", parked);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        crate::builder::NavigatorBuilder::new().build()
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("phase", &self.phase)
            .field("stack", &self.stack)
            .field("pending_modal", &self.pending_modal)
            .field("default_transition", &self.default_transition)
            .finish_non_exhaustive()
    }
}
