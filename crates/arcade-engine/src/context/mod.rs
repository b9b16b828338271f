//! Context protocol handed to game callbacks.
//!
//! A context is built fresh for every redraw or frame callback and never
//! outlives it. Games hold no references to drawables, only string
//! identifiers; the provider owns the identifier map and translates each call
//! into layer operations.
//!
//! Protocol versions are selected by `ContextRevision`. The engine resolves
//! the revision to a `ContextProvider` once at set up and keeps that strategy
//! for its lifetime.

mod ctx;
mod error;
mod junkrat;
mod normalize;

pub(crate) use ctx::Access;
pub use ctx::{Creator, FrameCtx, RedrawCtx};
pub use error::ContextError;
pub use junkrat::JunkratProvider;
pub use normalize::{normalize, Normalized, HEIGHT_KEYS, RENAME_KEY, WIDTH_KEYS};

use std::fmt;

use crate::coords::SurfaceSize;
use crate::input::{CapturedEvent, EventKind, SurfaceEvent};
use crate::scene::{Attrs, Layer, ShapeId, ShapeKind};

/// Context protocol version a game is written against.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ContextRevision {
    Junkrat,
}

impl ContextRevision {
    pub const ALL: [ContextRevision; 1] = [ContextRevision::Junkrat];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContextRevision::Junkrat => "junkrat",
        }
    }

    /// Capability tag advertised by engines implementing this revision.
    pub const fn feature_tag(self) -> &'static str {
        match self {
            ContextRevision::Junkrat => "context:junkrat",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Builds the provider implementing this revision.
    pub fn provider(self) -> Box<dyn ContextProvider> {
        match self {
            ContextRevision::Junkrat => Box::new(JunkratProvider::new()),
        }
    }
}

impl fmt::Display for ContextRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only statistics exposed to games as `ctx.system()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// Timestamp of the tick (or of the start/resume for a redraw), in ms.
    pub timestamp: f64,
    /// Frames drawn, carried across engine replacement.
    pub number_frame: u64,
    /// Milliseconds elapsed between drawn frames, carried across engine replacement.
    pub number_millisecond: f64,
    /// Frames drawn by the current engine.
    pub engine_number_frame: u64,
    /// Milliseconds elapsed on the current engine.
    pub engine_number_millisecond: f64,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
}

/// One context protocol revision.
///
/// Implementations own the identifier → drawable mapping and the per
/// identifier event queues. Every failing operation must leave the mapping
/// untouched.
pub trait ContextProvider {
    fn revision(&self) -> ContextRevision;

    /// Creates a drawable under a new identifier.
    fn create(
        &mut self,
        layer: &mut Layer,
        size: SurfaceSize,
        identifier: &str,
        kind: ShapeKind,
        config: Attrs,
    ) -> Result<ShapeId, ContextError>;

    /// Applies `config` to an existing drawable, renaming it if the config
    /// carries an identifier.
    fn update(
        &mut self,
        layer: &mut Layer,
        size: SurfaceSize,
        identifier: &str,
        config: Attrs,
    ) -> Result<(), ContextError>;

    /// Destroys a drawable and forgets its identifier.
    fn remove(&mut self, layer: &mut Layer, identifier: &str) -> Result<(), ContextError>;

    /// Pops the oldest pending event of `kind` captured against `identifier`.
    fn dequeue_event(&mut self, identifier: &str, kind: EventKind) -> Option<CapturedEvent>;

    /// Queues a surface event if its target is mapped and listens to it.
    /// Returns whether the event was kept.
    fn capture(&mut self, layer: &Layer, event: SurfaceEvent) -> bool;

    /// Drawable currently mapped to `identifier`.
    fn resolve(&self, identifier: &str) -> Option<ShapeId>;

    /// Number of mapped identifiers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
