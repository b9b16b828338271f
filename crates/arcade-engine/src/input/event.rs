use std::fmt;

use crate::scene::ShapeId;

/// Event kinds a drawable can listen to through its `eventList` attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    MouseEnter,
    MouseLeave,
    MouseDown,
    MouseUp,
    Click,
    KeyDown,
}

impl EventKind {
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseUp => "mouseup",
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
        }
    }

    pub const fn feature_tag(self) -> &'static str {
        match self {
            EventKind::MouseEnter => "event:mouseenter",
            EventKind::MouseLeave => "event:mouseleave",
            EventKind::MouseDown => "event:mousedown",
            EventKind::MouseUp => "event:mouseup",
            EventKind::Click => "event:click",
            EventKind::KeyDown => "event:keydown",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name {
            "mouseenter" => EventKind::MouseEnter,
            "mouseleave" => EventKind::MouseLeave,
            "mousedown" => EventKind::MouseDown,
            "mouseup" => EventKind::MouseUp,
            "click" => EventKind::Click,
            "keydown" => EventKind::KeyDown,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One captured event, as handed back by `DequeueEvent`.
///
/// `detail` carries the event payload where one exists (the key name of a
/// `keydown`, for instance).
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub kind: EventKind,
    pub detail: Option<String>,
}

impl CapturedEvent {
    #[inline]
    pub fn new(kind: EventKind) -> Self {
        Self { kind, detail: None }
    }

    #[inline]
    pub fn with_detail(kind: EventKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: Some(detail.into()) }
    }
}

/// An event reported by a surface against the drawable it hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEvent {
    pub target: ShapeId,
    pub event: CapturedEvent,
}
