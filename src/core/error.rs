//=========================================================================
// Navigation Errors
//=========================================================================
//
// Error taxonomy for the navigation core.
//
// - ConfigurationError: programmer misuse, surfaced synchronously and
//   never retried (unknown ids, registry misconfiguration)
// - InvalidStateError: a valid request issued in the wrong state
//
// Requests made while a transition is in flight are NOT errors; they are
// dropped or deferred by the navigator.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigurationError ==================================================

/// Misconfiguration detected while resolving a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No scene registry was supplied before the first navigation.
    #[error("scene registry has not been set")]
    ScenesNotSet,

    /// `set_scenes` was called while a registry is already installed.
    #[error("scene registry is already set")]
    ScenesAlreadySet,

    /// The requested scene id is not in the registry.
    #[error("unknown scene `{0}`")]
    UnknownScene(String),

    /// The requested transition id (before any `:config` suffix) is not registered.
    #[error("unknown transition `{0}`")]
    UnknownTransition(String),

    /// A second scene was marked as the default.
    #[error("scene `{requested}` cannot be the default, `{existing}` already is")]
    DuplicateDefaultScene {
        /// Scene already holding the default flag.
        existing: String,
        /// Scene that tried to claim it.
        requested: String,
    },

    /// `start` was called but no scene is marked as the default.
    #[error("no default scene registered")]
    NoDefaultScene,
}

//=== InvalidStateError ===================================================

/// A request that is well-formed but not valid in the current stack state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    /// `dismiss_scene` was called while no modal is presented.
    #[error("no modal scene is currently presented")]
    NotPresentingModal,
}

//=== NavError ============================================================

/// Top-level error returned by navigator entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// See [`ConfigurationError`].
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// See [`InvalidStateError`].
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
}

impl NavError {
    /// Returns true for programmer-misuse errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert_into_nav_error() {
        let err: NavError = ConfigurationError::UnknownScene("play".into()).into();
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "unknown scene `play`");
    }

    #[test]
    fn invalid_state_is_not_configuration() {
        let err: NavError = InvalidStateError::NotPresentingModal.into();
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "no modal scene is currently presented");
    }

    #[test]
    fn duplicate_default_names_both_scenes() {
        let err = ConfigurationError::DuplicateDefaultScene {
            existing: "home".into(),
            requested: "play".into(),
        };
        assert_eq!(
            err.to_string(),
            "scene `play` cannot be the default, `home` already is"
        );
    }
}
