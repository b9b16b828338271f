use arcade_engine::time::FpsMeter;
use arcade_engine::Engine;

use crate::game::GameData;
use crate::registry::GameKey;

/// Where the application is in the session lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    Running(GameKey),
    Paused(GameKey),
}

impl SessionState {
    pub fn game(self) -> Option<GameKey> {
        match self {
            SessionState::NoSession => None,
            SessionState::Running(key) | SessionState::Paused(key) => Some(key),
        }
    }
}

/// The single live run of a game: its state, its engine and its timing.
pub(crate) struct Session {
    pub(crate) game: GameKey,
    pub(crate) data: GameData,
    pub(crate) engine: Engine,
    pub(crate) fps: FpsMeter,
}

impl Session {
    /// Stops the loop and destroys the engine's surface.
    pub(crate) fn end(self) {
        let Session { mut engine, .. } = self;
        engine.stop();
        engine.clean_up();
    }
}
