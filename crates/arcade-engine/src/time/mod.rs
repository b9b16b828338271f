//! Time subsystem.
//!
//! Timestamps are `f64` milliseconds on a monotonic timeline, the unit the
//! frame callback delivers them in. Components:
//! - `Clock`: where "now" comes from outside a tick (start, resume)
//! - `SystemStats`: per-engine frame/millisecond counters
//! - `FpsMeter`: per-session counters and the rolling FPS report

mod clock;
mod fps;
mod stats;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fps::{FpsMeter, FPS_REPORT_INTERVAL_MS};
pub use stats::{StatsSeed, SystemStats};
