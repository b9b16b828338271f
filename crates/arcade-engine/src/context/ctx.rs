use crate::coords::SurfaceSize;
use crate::input::{CapturedEvent, EventKind};
use crate::scene::{Attrs, Layer, ShapeKind};

use super::{ContextError, ContextProvider, SystemSnapshot};

/// Engine state a context operates on for the duration of one callback.
pub(crate) struct Access<'a> {
    pub(crate) provider: &'a mut dyn ContextProvider,
    pub(crate) layer: &'a mut Layer,
    pub(crate) size: SurfaceSize,
}

/// Context passed to a game's `redraw`.
///
/// A redraw rebuilds the visual state from scratch, so only creation is
/// offered.
pub struct RedrawCtx<'a> {
    access: Access<'a>,
    system: SystemSnapshot,
}

impl<'a> RedrawCtx<'a> {
    pub(crate) fn new(access: Access<'a>, system: SystemSnapshot) -> Self {
        Self { access, system }
    }

    /// Starts creating a drawable named `identifier`; pick its kind on the
    /// returned [`Creator`].
    pub fn create(&mut self, identifier: impl Into<String>) -> Creator<'_, 'a> {
        Creator {
            access: &mut self.access,
            identifier: identifier.into(),
        }
    }

    #[inline]
    pub fn system(&self) -> &SystemSnapshot {
        &self.system
    }
}

/// Context passed to a game's `on_frame`.
pub struct FrameCtx<'a> {
    access: Access<'a>,
    system: SystemSnapshot,
}

impl<'a> FrameCtx<'a> {
    pub(crate) fn new(access: Access<'a>, system: SystemSnapshot) -> Self {
        Self { access, system }
    }

    pub fn create(&mut self, identifier: impl Into<String>) -> Creator<'_, 'a> {
        Creator {
            access: &mut self.access,
            identifier: identifier.into(),
        }
    }

    /// Applies `config` to the drawable named `identifier`.
    ///
    /// A text `identifier` entry in `config` renames the drawable; the old
    /// name stops resolving and the same drawable answers to the new one.
    pub fn update(&mut self, identifier: &str, config: Attrs) -> Result<(), ContextError> {
        let Access { provider, layer, size } = &mut self.access;
        provider.update(layer, *size, identifier, config)
    }

    /// Destroys the drawable named `identifier`.
    pub fn remove(&mut self, identifier: &str) -> Result<(), ContextError> {
        let Access { provider, layer, .. } = &mut self.access;
        provider.remove(layer, identifier)
    }

    /// Takes at most one pending `kind` event captured against `identifier`.
    pub fn dequeue_event(&mut self, identifier: &str, kind: EventKind) -> Option<CapturedEvent> {
        self.access.provider.dequeue_event(identifier, kind)
    }

    #[inline]
    pub fn system(&self) -> &SystemSnapshot {
        &self.system
    }
}

/// Pending creation of one drawable.
///
/// ```ignore
/// ctx.create("text%title%0").text(Attrs::new().with("x", 0.1).with("text", "Hi"))?;
/// ```
pub struct Creator<'c, 'a> {
    access: &'c mut Access<'a>,
    identifier: String,
}

impl Creator<'_, '_> {
    pub fn shape(self, kind: ShapeKind, config: Attrs) -> Result<(), ContextError> {
        let Access { provider, layer, size } = self.access;
        provider.create(layer, *size, &self.identifier, kind, config)?;
        Ok(())
    }

    pub fn rect(self, config: Attrs) -> Result<(), ContextError> {
        self.shape(ShapeKind::Rect, config)
    }

    pub fn ellipse(self, config: Attrs) -> Result<(), ContextError> {
        self.shape(ShapeKind::Ellipse, config)
    }

    pub fn line(self, config: Attrs) -> Result<(), ContextError> {
        self.shape(ShapeKind::Line, config)
    }

    pub fn image(self, config: Attrs) -> Result<(), ContextError> {
        self.shape(ShapeKind::Image, config)
    }

    pub fn text(self, config: Attrs) -> Result<(), ContextError> {
        self.shape(ShapeKind::Text, config)
    }
}
