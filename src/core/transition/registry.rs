//=========================================================================
// Transition Registry
//=========================================================================
//
// Maps base transition ids to strategy factories. One factory may be
// registered under several ids (aliases).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{
    FadeTransition, JumpTransition, OverTransition, PixelateTransition, PlaxMaskTransition,
    TransitionParams, TransitionStrategy,
};

//=== TransitionFactory ===================================================

/// Builds one strategy instance per navigation.
pub type TransitionFactory = Rc<dyn Fn(&TransitionParams) -> Box<dyn TransitionStrategy>>;

//=== TransitionRegistry ==================================================

#[derive(Clone, Default)]
pub struct TransitionRegistry {
    factories: HashMap<String, TransitionFactory>,
}

impl TransitionRegistry {
    /// Registry with no strategies at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in strategies.
    ///
    /// | ids              | strategy               |
    /// |------------------|------------------------|
    /// | `fade`           | [`FadeTransition`]     |
    /// | `jump`, `cut`    | [`JumpTransition`]     |
    /// | `over`, `cover`  | [`OverTransition`]     |
    /// | `pixelate`       | [`PixelateTransition`] |
    /// | `plaxmask`       | [`PlaxMaskTransition`] |
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(&["fade"], |p| Box::new(FadeTransition::new(p)));
        registry.register(&["jump", "cut"], |p| Box::new(JumpTransition::new(p)));
        registry.register(&["over", "cover"], |p| Box::new(OverTransition::new(p)));
        registry.register(&["pixelate"], |p| Box::new(PixelateTransition::new(p)));
        registry.register(&["plaxmask"], |p| Box::new(PlaxMaskTransition::new(p)));
        registry
    }

    //--- register() -------------------------------------------------------
    //
    // The last registration for an id wins; overwriting logs a warning.
    //
    pub fn register<F>(&mut self, ids: &[&str], factory: F)
    where
        F: Fn(&TransitionParams) -> Box<dyn TransitionStrategy> + 'static,
    {
        let factory: TransitionFactory = Rc::new(factory);
        for id in ids {
            if self.factories.insert((*id).to_owned(), Rc::clone(&factory)).is_some() {
                warn!("Transition {:?} was already registered and has been replaced", id);
            }
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, ids: &[&str], factory: F) -> Self
    where
        F: Fn(&TransitionParams) -> Box<dyn TransitionStrategy> + 'static,
    {
        self.register(ids, factory);
        self
    }

    /// Removes an id; returns whether it was present.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.factories.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Instantiates the strategy registered under `params.transition_id`.
    pub fn create(&self, params: &TransitionParams) -> Option<Box<dyn TransitionStrategy>> {
        self.factories
            .get(&params.transition_id)
            .map(|factory| factory(params))
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for TransitionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_every_alias() {
        let registry = TransitionRegistry::with_builtins();
        assert_eq!(
            registry.ids(),
            vec!["cover", "cut", "fade", "jump", "over", "pixelate", "plaxmask"]
        );
    }

    #[test]
    fn create_passes_params_through() {
        let registry = TransitionRegistry::with_builtins();
        let params = TransitionParams::new("cover", Some("left".into()), true);

        let strategy = registry.create(&params);

        let strategy = strategy.as_deref();
        assert_eq!(strategy.map(|s| s.id()), Some("over"));
        assert_eq!(strategy.map(|s| s.is_modal()), Some(true));
    }

    #[test]
    fn unknown_id_creates_nothing() {
        let registry = TransitionRegistry::with_builtins();
        assert!(registry.create(&TransitionParams::new("pan", None, false)).is_none());
    }

    #[test]
    fn last_registration_wins() {
        let registry = TransitionRegistry::with_builtins()
            .with(&["fade"], |p| Box::new(JumpTransition::new(p)));

        let strategy = registry.create(&TransitionParams::new("fade", None, false));

        assert_eq!(strategy.as_deref().map(|s| s.id()), Some("jump"));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn unregister_removes_single_alias() {
        let mut registry = TransitionRegistry::with_builtins();

        assert!(registry.unregister("cut"));
        assert!(!registry.unregister("cut"));
        assert!(registry.contains("jump"));
        assert!(!TransitionRegistry::empty().contains("fade"));
    }
}
