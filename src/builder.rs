//=========================================================================
// Navigator Builder
//
// Configuration entry point for the navigation core.
//
// Architecture:
// ```text
//     NavigatorBuilder  ──build()──>  Navigator  ──start()──>  default scene
//         │                              │
//         ├─ with_scenes()               └─ update(dt) once per host frame
//         ├─ with_transitions()             handle_window_event(&event)
//         ├─ with_default_transition()
//         ├─ with_stage_size()
//         ├─ with_resize_debounce()
//         ├─ with_background()
//         ├─ with_seed()
//         └─ with_stack_tracing()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::nav::Navigator;
use crate::core::scene::SceneRegistry;
use crate::core::stage::{Color, StageSize};
use crate::core::transition::TransitionRegistry;

//=== NavigatorSettings ===================================================

/// Everything the navigator is constructed from.
pub(crate) struct NavigatorSettings {
    pub scenes: Option<SceneRegistry>,
    pub transitions: TransitionRegistry,
    pub default_transition: String,
    pub stage_size: StageSize,
    pub background: Color,
    pub resize_debounce: Duration,
    pub seed: Option<u64>,
    pub trace_stack: bool,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            scenes: None,
            transitions: TransitionRegistry::with_builtins(),
            default_transition: "fade".to_owned(),
            stage_size: StageSize::default(),
            background: Color::BLACK,
            resize_debounce: Duration::from_millis(250),
            seed: None,
            trace_stack: false,
        }
    }
}

//=== NavigatorBuilder ====================================================

/// Builder for configuring and constructing a [`Navigator`].
///
/// # Default Values
///
/// - **Scenes**: none (call [`Navigator::set_scenes`] later)
/// - **Transitions**: built-ins (`fade`, `jump`/`cut`, `over`/`cover`,
///   `pixelate`, `plaxmask`)
/// - **Default transition**: `"fade"`
/// - **Stage size**: 1280×720
/// - **Resize debounce**: 250 ms
/// - **Background**: black
/// - **Seed**: entropy
/// - **Stack tracing**: off
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_stage::prelude::*;
///
/// struct Menu;
/// impl Scene for Menu {}
///
/// let scenes = SceneRegistry::new()
///     .with("menu", SceneConfig::new(|_| Menu).as_default())
///     .unwrap();
///
/// let navigator = NavigatorBuilder::new()
///     .with_scenes(scenes)
///     .with_default_transition("jump")
///     .with_stage_size(StageSize::new(800, 600))
///     .with_resize_debounce(Duration::from_millis(100))
///     .with_seed(7)
///     .build();
///
/// assert_eq!(navigator.depth(), 0);
/// ```
pub struct NavigatorBuilder {
    settings: NavigatorSettings,
}

impl NavigatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: NavigatorSettings::default(),
        }
    }

    /// Installs the scene registry up front.
    pub fn with_scenes(mut self, scenes: SceneRegistry) -> Self {
        self.settings.scenes = Some(scenes);
        self
    }

    /// Replaces the transition registry.
    ///
    /// Default: [`TransitionRegistry::with_builtins`]
    pub fn with_transitions(mut self, transitions: TransitionRegistry) -> Self {
        self.settings.transitions = transitions;
        self
    }

    /// Transition used when neither the call nor the scene names one.
    ///
    /// Default: `"fade"`
    ///
    /// # Panics
    ///
    /// Panics if `transition_id` is empty.
    pub fn with_default_transition(mut self, transition_id: impl Into<String>) -> Self {
        let transition_id = transition_id.into();
        assert!(!transition_id.is_empty(), "Default transition must not be empty");
        self.settings.default_transition = transition_id;
        self
    }

    /// Initial stage size in pixels.
    ///
    /// Default: 1280×720
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_stage_size(mut self, size: StageSize) -> Self {
        assert!(
            size.width > 0 && size.height > 0,
            "Stage size must be positive, got {}x{}",
            size.width,
            size.height
        );
        self.settings.stage_size = size;
        self
    }

    /// Quiet period a resize must survive before scenes are relaid out
    /// and the stack is reloaded. Zero applies resizes on the next update.
    ///
    /// Default: 250 ms
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.settings.resize_debounce = delay;
        self
    }

    /// Initial background tint.
    ///
    /// Default: black
    pub fn with_background(mut self, color: Color) -> Self {
        self.settings.background = color;
        self
    }

    /// Seeds instance id generation for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    /// Logs the transition stack at debug level after every mutation.
    pub fn with_stack_tracing(mut self, enabled: bool) -> Self {
        self.settings.trace_stack = enabled;
        self
    }

    /// Builds the navigator.
    pub fn build(self) -> Navigator {
        let settings = self.settings;
        info!(
            "Building navigator (stage: {}x{}, default transition: {}, transitions: {})",
            settings.stage_size.width,
            settings.stage_size.height,
            settings.default_transition,
            settings.transitions.len()
        );
        Navigator::from_settings(settings)
    }
}

impl Default for NavigatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // NavigatorBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = NavigatorBuilder::new();
        assert!(builder.settings.scenes.is_none());
        assert_eq!(builder.settings.default_transition, "fade");
        assert_eq!(builder.settings.stage_size, StageSize::new(1280, 720));
        assert_eq!(builder.settings.resize_debounce, Duration::from_millis(250));
        assert_eq!(builder.settings.background, Color::BLACK);
        assert!(builder.settings.transitions.contains("plaxmask"));
        assert!(!builder.settings.trace_stack);
    }

    #[test]
    fn builder_with_stage_size() {
        let builder = NavigatorBuilder::new().with_stage_size(StageSize::new(640, 480));
        assert_eq!(builder.settings.stage_size, StageSize::new(640, 480));
    }

    #[test]
    #[should_panic(expected = "Stage size must be positive")]
    fn builder_with_stage_size_panics_on_zero_width() {
        NavigatorBuilder::new().with_stage_size(StageSize::new(0, 480));
    }

    #[test]
    #[should_panic(expected = "Default transition must not be empty")]
    fn builder_with_default_transition_panics_on_empty() {
        NavigatorBuilder::new().with_default_transition("");
    }

    #[test]
    fn builder_with_transitions_replaces_registry() {
        let builder = NavigatorBuilder::new().with_transitions(TransitionRegistry::empty());
        assert!(builder.settings.transitions.is_empty());
    }

    #[test]
    fn builder_build_creates_idle_navigator() {
        let navigator = NavigatorBuilder::new().build();
        assert!(!navigator.is_locked());
        assert_eq!(navigator.depth(), 0);
        assert!(navigator.scenes().is_none());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let navigator = NavigatorBuilder::new()
            .with_scenes(SceneRegistry::new())
            .with_stage_size(StageSize::new(800, 600))
            .with_background(Color::WHITE)
            .with_seed(1)
            .with_stack_tracing(true)
            .build();

        assert!(navigator.scenes().is_some());
        assert_eq!(navigator.stage().size(), StageSize::new(800, 600));
        assert_eq!(navigator.stage().background().color(), Color::WHITE);
    }
}
