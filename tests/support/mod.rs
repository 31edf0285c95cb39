//! Shared fixtures for navigator integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use aetheric_stage::core::input::InputEvent;
use aetheric_stage::core::nav::ReadySignal;
use aetheric_stage::core::scene::{Scene, SceneConfig, SceneData, SceneRegistry, INSTANCE_ID_KEY};
use aetheric_stage::core::stage::StageSize;
use aetheric_stage::core::transition::{FadeTransition, JumpTransition, TransitionRegistry};
use aetheric_stage::{Navigator, NavigatorBuilder};
use serde_json::Value;

pub const TICK: Duration = Duration::from_millis(16);

/// Lifecycle calls in the order they happened, as `"<scene>.<hook>(..)"`.
pub type Log = Rc<RefCell<Vec<String>>>;

/// Every payload a factory was called with, in order.
pub type Built = Rc<RefCell<Vec<(String, SceneData)>>>;

//=== Recorder ============================================================

/// Scene that records every lifecycle hook it receives.
pub struct Recorder {
    name: String,
    log: Log,
    reload_on_resize: bool,
}

impl Recorder {
    fn push(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl Scene for Recorder {
    fn prepare(&mut self, ready: ReadySignal) {
        self.push(format!("{}.prepare", self.name));
        ready.signal();
    }

    fn on_will_arrive(&mut self, from_modal: bool, data: Option<&SceneData>) {
        match data {
            Some(data) => self.push(format!(
                "{}.will_arrive({}, {})",
                self.name,
                from_modal,
                Value::Object(data.clone())
            )),
            None => self.push(format!("{}.will_arrive({})", self.name, from_modal)),
        }
    }

    fn on_did_arrive(&mut self, from_modal: bool, _data: Option<&SceneData>) {
        self.push(format!("{}.did_arrive({})", self.name, from_modal));
    }

    fn on_will_exit(&mut self, from_modal: bool) {
        self.push(format!("{}.will_exit({})", self.name, from_modal));
    }

    fn on_did_exit(&mut self, from_modal: bool) {
        self.push(format!("{}.did_exit({})", self.name, from_modal));
    }

    fn on_input(&mut self, event: &InputEvent) {
        self.push(format!("{}.input({:?})", self.name, event));
    }

    fn on_resize(&mut self, size: StageSize) {
        self.push(format!("{}.resize({}x{})", self.name, size.width, size.height));
    }

    fn should_reload_on_resize(&self) -> bool {
        self.reload_on_resize
    }

    fn dispose(&mut self) {
        self.push(format!("{}.dispose", self.name));
    }
}

//=== Fixture =============================================================

pub struct Fixture {
    pub navigator: Navigator,
    pub log: Log,
    pub built: Built,
}

impl Fixture {
    /// `home` (default) and `play`, plus `pause` and `options` for modals.
    pub fn new() -> Self {
        Self::with(NavigatorBuilder::new(), &[])
    }

    /// Same scenes, with the listed ones vetoing reload-on-resize.
    pub fn with(builder: NavigatorBuilder, no_reload: &[&str]) -> Self {
        let log = Log::default();
        let built = Built::default();
        let scenes = registry(&log, &built, &["home", "play", "pause", "options"], no_reload);
        let navigator = builder.with_scenes(scenes).with_seed(11).build();
        Self { navigator, log, built }
    }

    /// Starts on `home` and waits for it to arrive.
    pub fn started() -> Self {
        let mut fixture = Self::new();
        fixture.start();
        fixture
    }

    pub fn start(&mut self) {
        self.navigator.start().expect("start");
        self.settle();
        self.take_log();
    }

    /// Ticks until the navigator is idle and the channel is drained.
    pub fn settle(&mut self) {
        settle(&mut self.navigator);
    }

    pub fn take_log(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn count(&self, entry: &str) -> usize {
        self.log.borrow().iter().filter(|e| e.as_str() == entry).count()
    }

    /// Payloads `scene_id` has been constructed with.
    pub fn built_for(&self, scene_id: &str) -> Vec<SceneData> {
        self.built
            .borrow()
            .iter()
            .filter(|(id, _)| id == scene_id)
            .map(|(_, data)| data.clone())
            .collect()
    }
}

pub fn settle(navigator: &mut Navigator) {
    // One extra update after unlocking drains anything queued by the
    // arrival hooks themselves.
    for _ in 0..2000 {
        navigator.update(TICK).expect("update");
        if !navigator.is_locked() {
            navigator.update(Duration::ZERO).expect("update");
            if !navigator.is_locked() {
                return;
            }
        }
    }
    panic!("navigator never settled: {:?}", navigator);
}

pub fn registry(log: &Log, built: &Built, ids: &[&str], no_reload: &[&str]) -> SceneRegistry {
    let mut registry = SceneRegistry::new();
    for (index, id) in ids.iter().enumerate() {
        let name = id.to_string();
        let reload_on_resize = !no_reload.contains(id);
        let (log, built) = (Rc::clone(log), Rc::clone(built));
        let mut config = SceneConfig::new(move |data: &SceneData| {
            log.borrow_mut().push(format!("{}.new", name));
            built.borrow_mut().push((name.clone(), data.clone()));
            Recorder {
                name: name.clone(),
                log: Rc::clone(&log),
                reload_on_resize,
            }
        });
        if index == 0 {
            config = config.as_default();
        }
        registry.register(*id, config).expect("register");
    }
    registry
}

/// Only `fade` and `jump` registered.
pub fn fade_and_jump() -> TransitionRegistry {
    TransitionRegistry::empty()
        .with(&["fade"], |p| Box::new(FadeTransition::new(p)))
        .with(&["jump"], |p| Box::new(JumpTransition::new(p)))
}

pub fn instance_of(data: &SceneData) -> Option<u64> {
    data.get(INSTANCE_ID_KEY).and_then(Value::as_u64)
}

pub fn json(value: Value) -> SceneData {
    match value {
        Value::Object(map) => map,
        _ => SceneData::new(),
    }
}
