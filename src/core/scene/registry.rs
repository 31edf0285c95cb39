//=========================================================================
// Scene Registry
//=========================================================================
//
// Maps scene ids to construction recipes. Installed into the navigator
// once before startup and read-only afterwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneData};
use crate::core::error::ConfigurationError;
use crate::core::stage::Color;

//=== SceneConfig =========================================================

/// Factory building a scene from its merged payload.
pub type SceneFactory = Box<dyn Fn(&SceneData) -> Box<dyn Scene>>;

/// Construction recipe and defaults for one scene id.
pub struct SceneConfig {
    factory: SceneFactory,
    data: SceneData,
    is_default: bool,
    default_transition: Option<String>,
    background: Option<Color>,
}

impl SceneConfig {
    /// Creates a recipe from a factory closure.
    pub fn new<F, S>(factory: F) -> Self
    where
        F: Fn(&SceneData) -> S + 'static,
        S: Scene + 'static,
    {
        Self {
            factory: Box::new(move |data: &SceneData| -> Box<dyn Scene> {
                Box::new(factory(data))
            }),
            data: SceneData::new(),
            is_default: false,
            default_transition: None,
            background: None,
        }
    }

    /// Static payload merged under call-site data.
    pub fn with_data(mut self, data: SceneData) -> Self {
        self.data = data;
        self
    }

    /// Marks this scene as the one opened by `Navigator::start`.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Transition used when `open_scene` is called without one.
    pub fn with_default_transition(mut self, transition_id: impl Into<String>) -> Self {
        self.default_transition = Some(transition_id.into());
        self
    }

    /// Background tint shown behind this scene.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub(crate) fn build(&self, data: &SceneData) -> Box<dyn Scene> {
        (self.factory)(data)
    }

    /// Static payload.
    pub fn data(&self) -> &SceneData {
        &self.data
    }

    /// Whether this is the default scene.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Configured default transition id, if any.
    pub fn default_transition(&self) -> Option<&str> {
        self.default_transition.as_deref()
    }

    /// Configured background tint, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl fmt::Debug for SceneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneConfig")
            .field("data", &self.data)
            .field("is_default", &self.is_default)
            .field("default_transition", &self.default_transition)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

//=== SceneRegistry =======================================================

/// Scene id → recipe table. At most one entry may be the default.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    scenes: HashMap<String, SceneConfig>,
    default_scene: Option<String>,
}

impl SceneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scene recipe.
    ///
    /// Re-registering an id replaces the previous recipe. Claiming the
    /// default flag while another id holds it is rejected.
    pub fn register(
        &mut self,
        scene_id: impl Into<String>,
        config: SceneConfig,
    ) -> Result<(), ConfigurationError> {
        let scene_id = scene_id.into();

        if config.is_default {
            match &self.default_scene {
                Some(existing) if *existing != scene_id => {
                    return Err(ConfigurationError::DuplicateDefaultScene {
                        existing: existing.clone(),
                        requested: scene_id,
                    });
                }
                _ => self.default_scene = Some(scene_id.clone()),
            }
        } else if self.default_scene.as_deref() == Some(scene_id.as_str()) {
            self.default_scene = None;
        }

        if self.scenes.insert(scene_id.clone(), config).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", scene_id);
        }
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(
        mut self,
        scene_id: impl Into<String>,
        config: SceneConfig,
    ) -> Result<Self, ConfigurationError> {
        self.register(scene_id, config)?;
        Ok(self)
    }

    /// Looks up a recipe.
    pub fn get(&self, scene_id: &str) -> Option<&SceneConfig> {
        self.scenes.get(scene_id)
    }

    /// Returns true if `scene_id` is registered.
    pub fn contains(&self, scene_id: &str) -> bool {
        self.scenes.contains_key(scene_id)
    }

    /// Id of the default scene.
    pub fn default_scene(&self) -> Option<&str> {
        self.default_scene.as_deref()
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
