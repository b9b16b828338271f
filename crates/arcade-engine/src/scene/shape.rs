use std::fmt;

use super::Attrs;

/// Stable identity of a drawable for the lifetime of its layer.
///
/// Ids are allocated in increasing order and never reused, so comparing
/// ids also compares creation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of drawable. Each kind is advertised to games as a `shape:<name>` tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Line,
    Image,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rect,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Image,
        ShapeKind::Text,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Image => "image",
            ShapeKind::Text => "text",
        }
    }

    pub const fn feature_tag(self) -> &'static str {
        match self {
            ShapeKind::Rect => "shape:rect",
            ShapeKind::Ellipse => "shape:ellipse",
            ShapeKind::Line => "shape:line",
            ShapeKind::Image => "shape:image",
            ShapeKind::Text => "shape:text",
        }
    }
}

/// A drawable object: its kind plus its current (pixel-space) attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub attrs: Attrs,
}

impl Shape {
    #[inline]
    pub fn new(kind: ShapeKind, attrs: Attrs) -> Self {
        Self { kind, attrs }
    }

    /// Whether the shape's `eventList` attribute names `event`.
    pub fn listens_to(&self, event: &str) -> bool {
        self.attrs.list_contains("eventList", event)
    }
}
