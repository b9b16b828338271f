use std::time::Duration;

use crate::coords::SurfaceSize;
use crate::input::Key;

/// Notification from the host platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostSignal {
    /// The host container exists and has this size.
    Ready { container: SurfaceSize },
    /// The host container changed size.
    SurfaceResized { container: SurfaceSize },
    /// The host lost input focus.
    FocusLost,
    /// A key was pressed.
    Key(Key),
}

/// Whether and when the app wants its next frame callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frames until the next signal.
    Idle,
    /// On the next display refresh.
    Immediate,
    /// Not before the given delay has elapsed.
    After(Duration),
}

impl FrameRequest {
    #[inline]
    pub fn wants_frame(self) -> bool {
        !matches!(self, FrameRequest::Idle)
    }
}

/// Application contract implemented by higher layers.
///
/// Errors are fatal: the runtime logs them and leaves the event loop.
pub trait App {
    /// Called for every host signal.
    fn on_signal(&mut self, signal: HostSignal) -> anyhow::Result<FrameRequest>;

    /// Called once per requested frame with a monotonic timestamp in ms.
    fn on_frame(&mut self, timestamp_ms: f64) -> anyhow::Result<FrameRequest>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_wants_no_frame() {
        assert!(!FrameRequest::Idle.wants_frame());
        assert!(FrameRequest::Immediate.wants_frame());
        assert!(FrameRequest::After(Duration::from_millis(5)).wants_frame());
    }
}
