//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the host window, and turns platform events
//! into [`HostSignal`](crate::core::HostSignal)s and frame callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
