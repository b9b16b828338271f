use std::collections::VecDeque;

use crate::coords::SurfaceSize;
use crate::input::SurfaceEvent;
use crate::scene::DrawList;

use super::{Surface, SurfaceFactory};

/// Surface that renders nowhere.
///
/// Keeps the most recent frame and a queue of injected events, which makes it
/// the surface of choice for tests and for hosts without a renderer.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    size: SurfaceSize,
    frames: u64,
    last_frame: DrawList,
    events: VecDeque<SurfaceEvent>,
    destroyed: bool,
}

impl HeadlessSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size, ..Self::default() }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> &DrawList {
        &self.last_frame
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Queues an event as if the host had captured it.
    pub fn inject(&mut self, event: SurfaceEvent) {
        self.events.push_back(event);
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, list: &mut DrawList) {
        debug_assert!(!self.destroyed, "present on a destroyed surface");
        self.frames += 1;
        self.last_frame.clone_from(list);
        log::trace!("headless frame {} ({} items)", self.frames, list.len());
    }

    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        out.extend(self.events.drain(..));
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Factory producing [`HeadlessSurface`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessSurfaceFactory;

impl SurfaceFactory for HeadlessSurfaceFactory {
    fn create_surface(&mut self, size: SurfaceSize) -> Box<dyn Surface> {
        log::debug!("creating headless surface {}x{}", size.width, size.height);
        Box::new(HeadlessSurface::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CapturedEvent, EventKind};
    use crate::scene::ShapeId;

    #[test]
    fn present_counts_frames_and_keeps_last() {
        let mut s = HeadlessSurface::new(SurfaceSize::new(4, 3));
        let mut list = DrawList::new();
        s.present(&mut list);
        s.present(&mut list);
        assert_eq!(s.frames(), 2);
        assert!(s.last_frame().is_empty());
        assert_eq!(s.size(), SurfaceSize::new(4, 3));
    }

    #[test]
    fn drain_empties_injected_events() {
        let mut s = HeadlessSurface::new(SurfaceSize::new(1, 1));
        s.inject(SurfaceEvent { target: ShapeId(0), event: CapturedEvent::new(EventKind::MouseDown) });
        let mut out = Vec::new();
        s.drain_events(&mut out);
        assert_eq!(out.len(), 1);
        out.clear();
        s.drain_events(&mut out);
        assert!(out.is_empty());
    }
}
