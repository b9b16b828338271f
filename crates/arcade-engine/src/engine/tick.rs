use std::time::Duration;

use crate::context::FrameCtx;

/// When the next tick should run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Wake {
    /// On the next host frame callback.
    Immediate,
    /// After the given delay, then on the next host frame callback.
    After(Duration),
}

impl Wake {
    /// Scheduling decision for an optional throttle interval in milliseconds.
    pub fn from_throttle(throttle_timeout_ms: Option<f64>) -> Self {
        match throttle_timeout_ms {
            Some(ms) if ms > 0.0 && ms.is_finite() => Wake::After(Duration::from_secs_f64(ms / 1000.0)),
            _ => Wake::Immediate,
        }
    }
}

/// Outcome of one call to [`Engine::tick`](super::Engine::tick).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Tick {
    /// The loop was stopped; nothing ran and no further tick is wanted.
    Stopped,
    /// A frame was drawn.
    Ran {
        /// Whether the game update ran (false on the pre-frame tick).
        updated: bool,
        wake: Wake,
    },
}

/// Callbacks an engine makes into its owner while ticking.
pub trait FrameDelegate {
    /// Runs the game update for this tick.
    fn on_game_update(&mut self, ctx: &mut FrameCtx<'_>) -> anyhow::Result<()>;

    /// Debug delay between ticks, in milliseconds.
    fn throttle_timeout(&self) -> Option<f64> {
        None
    }
}
