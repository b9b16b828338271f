//! Logging utilities.
//!
//! Lifecycle transitions (engine set up, loop start/exit, session changes) are
//! reported through the `log` facade. This module only wires the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
