//=========================================================================
// Scene System
//=========================================================================
//
// The scene lifecycle contract consumed by the navigator, plus scene
// identity and payload helpers.
//
// Lifecycle of one arrival (A replaced by B):
//   B::prepare ── ready ──> A::on_will_exit ─> B::on_will_arrive
//     ─> [transition animates] ─> A::on_did_exit ─> A::dispose
//     ─> B::on_did_arrive
//
// Scene data is a JSON object merged from three sources, later sources
// winning on key collision:
//   static registry data  <  call-site data  <  { sceneID, instanceID }
//
//=========================================================================

//=== Module Declarations =================================================

mod registry;

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde_json::{Map, Value};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::nav::ReadySignal;
use crate::core::stage::{Color, StageSize};

//=== Public API ==========================================================

pub use registry::{SceneConfig, SceneFactory, SceneRegistry};

/// Arbitrary payload handed to scenes at construction and on modal return.
pub type SceneData = Map<String, Value>;

/// Data key holding the registry id of the scene.
pub const SCENE_ID_KEY: &str = "sceneID";

/// Data key holding the generated instance id.
pub const INSTANCE_ID_KEY: &str = "instanceID";

//=== InstanceId ==========================================================

/// Randomly generated 7-digit identifier of one constructed scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Smallest generated id.
    pub const MIN: u32 = 1_000_000;

    /// Largest generated id.
    pub const MAX: u32 = 9_999_999;

    /// Wraps an existing raw id.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Draws a fresh 7-digit id.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//=== Scene Trait =========================================================

/// A full-screen presentable unit with a four-phase lifecycle.
///
/// Scenes are constructed by the factory registered in [`SceneRegistry`],
/// attached to the stage invisible, and must announce readiness through the
/// [`ReadySignal`] handed to [`Scene::prepare`] before any transition begins.
///
/// `from_modal` is true when the hook fires because a modal layer is being
/// presented over, or dismissed from, this scene.
///
/// # Minimal Implementation
///
/// Every method has a default; the default `prepare` signals immediately.
///
/// ```rust
/// use aetheric_stage::prelude::*;
///
/// struct Title;
///
/// impl Scene for Title {}
/// ```
pub trait Scene {
    /// Construction-time setup. Must eventually call `ready.signal()`.
    fn prepare(&mut self, ready: ReadySignal) {
        ready.signal();
    }

    /// Called right before the entrance animation starts.
    ///
    /// `data` is only present when returning from a dismissed modal and
    /// carries the dismissal payload.
    fn on_will_arrive(&mut self, _from_modal: bool, _data: Option<&SceneData>) {}

    /// Called once the scene is on top and interactive.
    fn on_did_arrive(&mut self, _from_modal: bool, _data: Option<&SceneData>) {}

    /// Called right before the scene starts animating away or being covered.
    fn on_will_exit(&mut self, _from_modal: bool) {}

    /// Called once the scene is fully hidden or covered.
    fn on_did_exit(&mut self, _from_modal: bool) {}

    /// Per-tick update for every attached scene.
    fn update(&mut self, _dt: Duration) {}

    /// Input routed to the top scene while the navigator is unlocked.
    fn on_input(&mut self, _event: &InputEvent) {}

    /// Stage size changed (after debouncing).
    fn on_resize(&mut self, _size: StageSize) {}

    /// Resize policy. Returning false vetoes the automatic rebuild.
    fn should_reload_on_resize(&self) -> bool {
        true
    }

    /// Background tint to show behind this scene, overriding the registry.
    fn background_color(&self) -> Option<Color> {
        None
    }

    /// Final teardown after the scene is detached from the stage.
    fn dispose(&mut self) {}
}

//=== Scene Data Helpers ==================================================

/// Builds the payload for a new instance.
///
/// Call-site keys override static keys; identity keys override both.
pub fn merge_scene_data(
    static_data: &SceneData,
    call_site: Option<&SceneData>,
    scene_id: &str,
    instance: InstanceId,
) -> SceneData {
    let mut merged = static_data.clone();
    if let Some(overrides) = call_site {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged.insert(SCENE_ID_KEY.to_owned(), Value::from(scene_id));
    merged.insert(INSTANCE_ID_KEY.to_owned(), Value::from(instance.get()));
    merged
}

/// Shallow clone without the generated identity keys.
pub fn sanitize_scene_data(data: &SceneData) -> SceneData {
    data.iter()
        .filter(|(key, _)| key.as_str() != SCENE_ID_KEY && key.as_str() != INSTANCE_ID_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn data(value: Value) -> SceneData {
        match value {
            Value::Object(map) => map,
            _ => SceneData::new(),
        }
    }

    //--- InstanceId -------------------------------------------------------

    #[test]
    fn generated_ids_have_seven_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let id = InstanceId::generate(&mut rng);
            assert!((InstanceId::MIN..=InstanceId::MAX).contains(&id.get()));
            assert_eq!(id.to_string().len(), 7);
        }
    }

    //--- Data merging -----------------------------------------------------

    #[test]
    fn call_site_data_wins_over_static() {
        let statics = data(json!({ "level": 1, "music": "calm" }));
        let call = data(json!({ "level": 3 }));

        let merged = merge_scene_data(&statics, Some(&call), "play", InstanceId::from_raw(1234567));

        assert_eq!(merged["level"], json!(3));
        assert_eq!(merged["music"], json!("calm"));
        assert_eq!(merged[SCENE_ID_KEY], json!("play"));
        assert_eq!(merged[INSTANCE_ID_KEY], json!(1234567));
    }

    #[test]
    fn identity_keys_cannot_be_overridden() {
        let call = data(json!({ "sceneID": "spoof", "instanceID": 1 }));

        let merged = merge_scene_data(
            &SceneData::new(),
            Some(&call),
            "home",
            InstanceId::from_raw(7654321),
        );

        assert_eq!(merged[SCENE_ID_KEY], json!("home"));
        assert_eq!(merged[INSTANCE_ID_KEY], json!(7654321));
    }

    #[test]
    fn sanitize_strips_identity_only() {
        let merged = merge_scene_data(
            &data(json!({ "level": 2 })),
            None,
            "play",
            InstanceId::from_raw(1111111),
        );

        let clean = sanitize_scene_data(&merged);

        assert_eq!(clean.len(), 1);
        assert_eq!(clean["level"], json!(2));
        assert!(!clean.contains_key(SCENE_ID_KEY));
        assert!(!clean.contains_key(INSTANCE_ID_KEY));
    }
}
