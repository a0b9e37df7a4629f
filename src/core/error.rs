//! Engine error type.
//!
//! Construction-time failures (bad configuration, bad die, incomplete moves,
//! unknown strategies) surface as `EngineError` and are never retried.
//! Broken internal invariants panic instead; text codecs return `Option`.

use thiserror::Error;

use super::layer::Layer;

/// Errors raised while building or driving the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A layer has no successor (Home is the last layer).
    #[error("layer {from:?} has no next layer")]
    InvalidTransition {
        /// The layer that could not be advanced.
        from: Layer,
    },

    /// A move was built without both endpoints.
    #[error("a move needs both a from and a to position")]
    InvalidMove,

    /// A die needs at least one face.
    #[error("a die needs at least one face, got {faces}")]
    InvalidDie {
        /// The rejected face count.
        faces: u32,
    },

    /// The rules configuration violates one of its ordering invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No strategy is registered under this name.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// A bracket cannot be seated on the configured board.
    #[error("invalid bracket: {0}")]
    InvalidBracket(String),
}

/// Convenience alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
