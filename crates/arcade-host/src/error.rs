use std::fmt;

use arcade_engine::EngineError;

use crate::registry::GameKey;

/// Failure of an application operation.
#[derive(Debug)]
pub enum AppError {
    /// No game is registered under this key.
    UnknownGame(GameKey),
    /// The engine lacks a capability the game requires.
    UnsupportedGame { name: String },
    /// A game was selected before the host reported its container.
    NotReady,
    Engine(EngineError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownGame(key) => write!(f, "no game registered as {key}"),
            AppError::UnsupportedGame { name } => write!(f, "game {name:?} is not selectable"),
            AppError::NotReady => write!(f, "host is not ready"),
            AppError::Engine(e) => write!(f, "engine error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        AppError::Engine(e)
    }
}
