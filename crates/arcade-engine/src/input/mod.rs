//! Input subsystem.
//!
//! Two streams reach the engine from the host:
//! - keyboard keys, forwarded to the application as host signals
//! - events captured against individual drawables (`SurfaceEvent`), which the
//!   context provider queues per identifier until a game dequeues them
//!
//! Public types do not expose winit; the runtime translates platform events.

mod event;
mod key;
mod queue;

pub use event::{CapturedEvent, EventKind, SurfaceEvent};
pub use key::Key;
pub use queue::EventQueue;
