//=========================================================================
// Stage
//=========================================================================
//
// The retained display tree the navigator attaches scenes to.
//
// Architecture:
//   Stage
//     ├─ background: Background     (tint behind everything)
//     ├─ nodes: HashMap<InstanceId, SceneNode>
//     │     └─ SceneNode { scene: Box<dyn Scene>, visual: Visual, .. }
//     ├─ order: Vec<InstanceId>     (z-order, last = front)
//     └─ shield: InputShield        (blocks input while locked)
//
// Ownership of a scene moves into the stage on attach and back out on
// detach; the navigator disposes detached scenes. Transitions only touch
// `Visual`s, never the stack.
//
//=========================================================================

//=== Module Declarations =================================================

mod background;
mod resize;
mod shield;

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::scene::{InstanceId, Scene, SceneData};

//=== Public API ==========================================================

pub use background::{Background, Color};
pub use resize::ResizeDebouncer;
pub use shield::InputShield;

//=== StageSize ===========================================================

/// Stage dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageSize {
    pub width: u32,
    pub height: u32,
}

impl StageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for StageSize {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

//=== Direction ===========================================================

/// Travel direction of incoming content.
///
/// `Left` means the arriving scene moves leftwards, i.e. enters from the
/// right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parses a direction word or its first letter (`top`/`bottom` accepted).
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Some(Self::Left),
            "r" | "right" => Some(Self::Right),
            "u" | "up" | "t" | "top" => Some(Self::Up),
            "d" | "down" | "b" | "bottom" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Off-stage offset a scene travelling this way starts from.
    pub fn entry_offset(self, size: StageSize) -> (f32, f32) {
        let (w, h) = (size.width as f32, size.height as f32);
        match self {
            Self::Left => (w, 0.0),
            Self::Right => (-w, 0.0),
            Self::Up => (0.0, h),
            Self::Down => (0.0, -h),
        }
    }
}

//=== Visual ==============================================================

/// One entry of a scene's filter stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Gaussian blur radius in pixels.
    Blur(f32),
    /// Pixelation block size (1.0 = sharp).
    Pixelate(f32),
    /// Rectangular reveal mask sweeping in from `from`; `reveal` in `0..=1`.
    Mask { reveal: f32, from: Direction },
}

/// Animatable scalar properties of a [`Visual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Alpha,
    X,
    Y,
    Blur,
    Pixelate,
    MaskReveal,
}

/// Display state of an attached scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    pub visible: bool,
    pub alpha: f32,
    pub x: f32,
    pub y: f32,
    pub filters: Vec<Filter>,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 1.0,
            x: 0.0,
            y: 0.0,
            filters: Vec::new(),
        }
    }
}

impl Visual {
    /// Freshly attached scenes start hidden.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Alpha => self.alpha,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Blur => self.filters.iter().find_map(|f| match f {
                Filter::Blur(radius) => Some(*radius),
                _ => None,
            }).unwrap_or(0.0),
            Property::Pixelate => self.filters.iter().find_map(|f| match f {
                Filter::Pixelate(size) => Some(*size),
                _ => None,
            }).unwrap_or(1.0),
            Property::MaskReveal => self.filters.iter().find_map(|f| match f {
                Filter::Mask { reveal, .. } => Some(*reveal),
                _ => None,
            }).unwrap_or(1.0),
        }
    }

    //--- set() ------------------------------------------------------------
    //
    // Blur and pixelate filters are created on first write. A mask needs a
    // direction, so it must be pushed explicitly; writing MaskReveal
    // without one is ignored.
    //
    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Alpha => self.alpha = value.clamp(0.0, 1.0),
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Blur => {
                match self.filters.iter_mut().find(|f| matches!(f, Filter::Blur(_))) {
                    Some(Filter::Blur(radius)) => *radius = value,
                    _ => self.filters.push(Filter::Blur(value)),
                }
            }
            Property::Pixelate => {
                match self.filters.iter_mut().find(|f| matches!(f, Filter::Pixelate(_))) {
                    Some(Filter::Pixelate(size)) => *size = value,
                    _ => self.filters.push(Filter::Pixelate(value)),
                }
            }
            Property::MaskReveal => {
                if let Some(Filter::Mask { reveal, .. }) =
                    self.filters.iter_mut().find(|f| matches!(f, Filter::Mask { .. }))
                {
                    *reveal = value.clamp(0.0, 1.0);
                }
            }
        }
    }

    /// Clears filters and restores position and opacity. Visibility is kept.
    pub fn reset_effects(&mut self) {
        self.filters.clear();
        self.alpha = 1.0;
        self.x = 0.0;
        self.y = 0.0;
    }

    /// True when the visual is in its resting state apart from visibility.
    pub fn is_settled(&self) -> bool {
        self.filters.is_empty() && self.alpha == 1.0 && self.x == 0.0 && self.y == 0.0
    }
}

//=== SceneNode ===========================================================

/// A scene attached to the stage.
pub struct SceneNode {
    scene_id: String,
    instance: InstanceId,
    data: SceneData,
    background: Option<Color>,
    pub visual: Visual,
    scene: Box<dyn Scene>,
}

impl SceneNode {
    pub fn new(
        scene_id: impl Into<String>,
        instance: InstanceId,
        data: SceneData,
        background: Option<Color>,
        scene: Box<dyn Scene>,
    ) -> Self {
        Self {
            scene_id: scene_id.into(),
            instance,
            data,
            background,
            visual: Visual::hidden(),
            scene,
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn data(&self) -> &SceneData {
        &self.data
    }

    /// Resolved background tint (scene override, then registry default).
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> &mut dyn Scene {
        self.scene.as_mut()
    }

    /// Runs the scene's teardown hook, consuming the node.
    pub(crate) fn dispose(mut self) {
        self.scene.dispose();
    }
}

impl std::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneNode")
            .field("scene_id", &self.scene_id)
            .field("instance", &self.instance)
            .field("visual", &self.visual)
            .finish_non_exhaustive()
    }
}

//=== Stage ===============================================================

/// Scene holder, background and input shield.
#[derive(Debug)]
pub struct Stage {
    size: StageSize,
    background: Background,
    shield: InputShield,
    nodes: HashMap<InstanceId, SceneNode>,
    order: Vec<InstanceId>,
}

impl Stage {
    //--- Construction -----------------------------------------------------

    pub fn new(size: StageSize, background: Color) -> Self {
        Self {
            size,
            background: Background::new(background),
            shield: InputShield::new(),
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    //--- Display Tree -----------------------------------------------------

    /// Adds a node in front of everything else.
    pub fn attach(&mut self, node: SceneNode) {
        let instance = node.instance;
        debug!("Attaching {} ({}) to stage", node.scene_id, instance);
        if self.nodes.insert(instance, node).is_some() {
            warn!("Instance {} was already attached and has been replaced", instance);
            self.order.retain(|id| *id != instance);
        }
        self.order.push(instance);
    }

    /// Removes a node, handing ownership back to the caller.
    pub fn detach(&mut self, instance: InstanceId) -> Option<SceneNode> {
        let node = self.nodes.remove(&instance)?;
        self.order.retain(|id| *id != instance);
        debug!("Detached {} ({}) from stage", node.scene_id, instance);
        Some(node)
    }

    /// Removes every node, front-most first.
    pub fn detach_all(&mut self) -> Vec<SceneNode> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .rev()
            .filter_map(|id| self.nodes.remove(&id))
            .collect()
    }

    pub fn contains(&self, instance: InstanceId) -> bool {
        self.nodes.contains_key(&instance)
    }

    pub fn node(&self, instance: InstanceId) -> Option<&SceneNode> {
        self.nodes.get(&instance)
    }

    pub fn node_mut(&mut self, instance: InstanceId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&instance)
    }

    pub fn scene_mut(&mut self, instance: InstanceId) -> Option<&mut dyn Scene> {
        self.nodes.get_mut(&instance).map(SceneNode::scene_mut)
    }

    pub fn visual(&self, instance: InstanceId) -> Option<&Visual> {
        self.nodes.get(&instance).map(|node| &node.visual)
    }

    pub fn visual_mut(&mut self, instance: InstanceId) -> Option<&mut Visual> {
        self.nodes.get_mut(&instance).map(|node| &mut node.visual)
    }

    /// Attached instances, back to front.
    pub fn instances(&self) -> &[InstanceId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    //--- Shared Layers ----------------------------------------------------

    pub fn size(&self) -> StageSize {
        self.size
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn background_mut(&mut self) -> &mut Background {
        &mut self.background
    }

    /// Background tint for `instance`, falling back to the current one.
    pub fn background_for(&self, instance: InstanceId) -> Color {
        self.node(instance)
            .and_then(SceneNode::background)
            .unwrap_or(self.background.color())
    }

    pub fn shield(&self) -> &InputShield {
        &self.shield
    }

    pub fn shield_mut(&mut self) -> &mut InputShield {
        &mut self.shield
    }

    //--- Per-Tick ---------------------------------------------------------

    /// Updates every attached scene, back to front.
    pub fn update_scenes(&mut self, dt: Duration) {
        for id in &self.order {
            if let Some(node) = self.nodes.get_mut(id) {
                node.scene.update(dt);
            }
        }
    }

    /// Applies a new size and notifies every attached scene.
    pub fn resize(&mut self, size: StageSize) {
        debug!("Stage resized to {}x{}", size.width, size.height);
        self.size = size;
        for id in &self.order {
            if let Some(node) = self.nodes.get_mut(id) {
                node.scene.on_resize(size);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;
    impl Scene for Blank {}

    fn node(raw: u32) -> SceneNode {
        SceneNode::new("blank", InstanceId::from_raw(raw), SceneData::new(), None, Box::new(Blank))
    }

    //--- Direction --------------------------------------------------------

    #[test]
    fn direction_parses_words_and_letters() {
        assert_eq!(Direction::parse("left"), Some(Direction::Left));
        assert_eq!(Direction::parse("R"), Some(Direction::Right));
        assert_eq!(Direction::parse("top"), Some(Direction::Up));
        assert_eq!(Direction::parse("b"), Some(Direction::Down));
        assert_eq!(Direction::parse("25"), None);
    }

    #[test]
    fn entry_offset_points_off_stage() {
        let size = StageSize::new(800, 600);
        assert_eq!(Direction::Left.entry_offset(size), (800.0, 0.0));
        assert_eq!(Direction::Down.entry_offset(size), (0.0, -600.0));
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    //--- Visual -----------------------------------------------------------

    #[test]
    fn filters_are_created_on_write_and_cleared_on_reset() {
        let mut visual = Visual::hidden();
        assert_eq!(visual.get(Property::Blur), 0.0);

        visual.set(Property::Blur, 8.0);
        visual.set(Property::Blur, 4.0);
        visual.set(Property::Pixelate, 12.0);
        visual.set(Property::X, 30.0);

        assert_eq!(visual.filters.len(), 2);
        assert_eq!(visual.get(Property::Blur), 4.0);
        assert!(!visual.is_settled());

        visual.reset_effects();
        assert!(visual.is_settled());
        assert!(!visual.visible);
    }

    #[test]
    fn mask_reveal_requires_a_mask() {
        let mut visual = Visual::default();
        visual.set(Property::MaskReveal, 0.2);
        assert!(visual.filters.is_empty());

        visual.filters.push(Filter::Mask { reveal: 0.0, from: Direction::Left });
        visual.set(Property::MaskReveal, 0.5);
        assert_eq!(visual.get(Property::MaskReveal), 0.5);
    }

    #[test]
    fn alpha_is_clamped() {
        let mut visual = Visual::default();
        visual.set(Property::Alpha, 1.5);
        assert_eq!(visual.alpha, 1.0);
    }

    //--- Stage ------------------------------------------------------------

    #[test]
    fn attach_starts_hidden_and_orders_front_last() {
        let mut stage = Stage::new(StageSize::default(), Color::BLACK);
        stage.attach(node(1000001));
        stage.attach(node(1000002));

        assert_eq!(
            stage.instances(),
            &[InstanceId::from_raw(1000001), InstanceId::from_raw(1000002)]
        );
        assert_eq!(stage.visual(InstanceId::from_raw(1000002)).map(|v| v.visible), Some(false));
    }

    #[test]
    fn detach_returns_ownership() {
        let mut stage = Stage::new(StageSize::default(), Color::BLACK);
        stage.attach(node(1000001));

        let detached = stage.detach(InstanceId::from_raw(1000001));

        assert_eq!(detached.map(|n| n.instance()), Some(InstanceId::from_raw(1000001)));
        assert!(stage.is_empty());
        assert!(stage.detach(InstanceId::from_raw(1000001)).is_none());
    }

    #[test]
    fn detach_all_is_front_first() {
        let mut stage = Stage::new(StageSize::default(), Color::BLACK);
        stage.attach(node(1000001));
        stage.attach(node(1000002));

        let ids: Vec<_> = stage.detach_all().iter().map(SceneNode::instance).collect();

        assert_eq!(ids, vec![InstanceId::from_raw(1000002), InstanceId::from_raw(1000001)]);
        assert!(stage.is_empty());
    }

    #[test]
    fn background_for_falls_back_to_current_tint() {
        let mut stage = Stage::new(StageSize::default(), Color::from_u32(0x101010));
        let tinted = SceneNode::new(
            "tinted",
            InstanceId::from_raw(2000000),
            SceneData::new(),
            Some(Color::WHITE),
            Box::new(Blank),
        );
        stage.attach(tinted);
        stage.attach(node(2000001));

        assert_eq!(stage.background_for(InstanceId::from_raw(2000000)), Color::WHITE);
        assert_eq!(stage.background_for(InstanceId::from_raw(2000001)), Color::from_u32(0x101010));
    }
}
