use std::fmt;

use crate::context::ContextError;

/// Failure raised by an engine operation or by the game code it called into.
#[derive(Debug)]
pub enum EngineError {
    /// The configured context revision has no provider.
    UnknownRevision(String),
    /// An operation that needs a surface was called before `set_up`.
    NotSetUp,
    /// `set_up` was called twice on the same engine.
    AlreadySetUp,
    /// The game misused the context protocol.
    Context(ContextError),
    /// A game callback returned an error.
    Game(anyhow::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownRevision(r) => write!(f, "unknown context revision {r:?}"),
            EngineError::NotSetUp => write!(f, "engine is not set up"),
            EngineError::AlreadySetUp => write!(f, "engine is already set up"),
            EngineError::Context(e) => write!(f, "context error: {e}"),
            EngineError::Game(e) => write!(f, "game error: {e:#}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Context(e) => Some(e),
            EngineError::Game(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<ContextError> for EngineError {
    fn from(e: ContextError) -> Self {
        EngineError::Context(e)
    }
}

impl EngineError {
    /// Classifies an error returned by a game callback.
    ///
    /// Context misuse propagated with `?` keeps its own variant so callers can
    /// tell protocol violations from game-specific failures.
    pub fn from_game(err: anyhow::Error) -> Self {
        match err.downcast::<ContextError>() {
            Ok(ctx) => EngineError::Context(ctx),
            Err(other) => EngineError::Game(other),
        }
    }
}
