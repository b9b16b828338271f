use super::{Attrs, ShapeId, ShapeKind};

/// Renderer-agnostic draw command: one shape as it stands this frame.
///
/// A surface turns these into actual drawing calls. Attribute values are
/// already in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub shape: ShapeId,
    pub kind: ShapeKind,
    pub attrs: Attrs,
}

impl DrawCmd {
    #[inline]
    pub fn new(shape: ShapeId, kind: ShapeKind, attrs: Attrs) -> Self {
        Self { shape, kind, attrs }
    }

    /// Whether the shape's `eventList` attribute names `event`.
    #[inline]
    pub fn listens_to(&self, event: &str) -> bool {
        self.attrs.list_contains("eventList", event)
    }
}
