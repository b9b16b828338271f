//! Arcade engine crate.
//!
//! This crate owns the drawable surface, the per-frame scheduler and the
//! context protocol handed to game callbacks. Session policy (which game runs,
//! when the engine is replaced) lives one layer up in `arcade-host`.

pub mod context;
pub mod coords;
pub mod core;
pub mod engine;
pub mod input;
pub mod logging;
pub mod scene;
pub mod surface;
pub mod time;
pub mod window;

pub use engine::{Engine, EngineConfig, EngineError, Tick, Wake, FEATURE_TAGS};
