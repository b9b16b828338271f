//! Host-facing application contract.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and the layer that owns game sessions. The runtime only forwards
//! signals and frame callbacks; every scheduling decision travels back as a
//! [`FrameRequest`].

mod app;

pub use app::{App, FrameRequest, HostSignal};
