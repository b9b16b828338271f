use std::cell::Cell;
use std::rc::Rc;

use log::{debug, trace};

use arcade_engine::coords::SurfaceSize;
use arcade_engine::input::{CapturedEvent, EventKind, SurfaceEvent};
use arcade_engine::scene::{DrawList, ShapeId};
use arcade_engine::surface::{Surface, SurfaceFactory};

/// Frames between two draw list dumps at debug level.
const DUMP_EVERY: u64 = 120;

/// Keyboard stand-in for the mouse: each click lands on the topmost drawable
/// that listens to `mousedown`.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    clicks: Rc<Cell<u32>>,
}

impl Pointer {
    pub fn click(&self) {
        self.clicks.set(self.clicks.get() + 1);
    }

    fn take(&self) -> u32 {
        self.clicks.replace(0)
    }
}

/// Surface that describes frames in the log instead of rasterizing them.
pub struct LogSurface {
    size: SurfaceSize,
    frames: u64,
    pointer: Pointer,
    /// Topmost `mousedown` listener of the last presented frame.
    target: Option<ShapeId>,
}

impl Surface for LogSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, list: &mut DrawList) {
        self.frames += 1;
        trace!("frame {} ({} drawables)", self.frames, list.len());

        let dump = self.frames % DUMP_EVERY == 1;
        self.target = None;
        for item in list.iter_in_paint_order() {
            let cmd = &item.cmd;
            if cmd.listens_to(EventKind::MouseDown.name()) {
                self.target = Some(cmd.shape);
            }
            if dump {
                debug!("  {} {} z={} {:?}", cmd.shape, cmd.kind.name(), item.key.z.0, cmd.attrs.text("text"));
            }
        }
    }

    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        let clicks = self.pointer.take();
        let Some(target) = self.target else {
            if clicks > 0 {
                debug!("click without a mousedown listener");
            }
            return;
        };
        for _ in 0..clicks {
            out.push(SurfaceEvent {
                target,
                event: CapturedEvent::new(EventKind::MouseDown),
            });
        }
    }

    fn destroy(&mut self) {
        debug!("log surface destroyed after {} frames", self.frames);
    }
}

#[derive(Debug, Default)]
pub struct LogSurfaceFactory {
    pointer: Pointer,
}

impl LogSurfaceFactory {
    /// Handle that clicks on every surface this factory creates.
    pub fn pointer(&self) -> Pointer {
        self.pointer.clone()
    }
}

impl SurfaceFactory for LogSurfaceFactory {
    fn create_surface(&mut self, size: SurfaceSize) -> Box<dyn Surface> {
        debug!("log surface {}x{}", size.width, size.height);
        Box::new(LogSurface {
            size,
            frames: 0,
            pointer: self.pointer.clone(),
            target: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::scene::{Attrs, DrawCmd, ShapeKind, ZIndex};

    fn frame() -> DrawList {
        let mut list = DrawList::new();
        let button = Attrs::new().with("eventList", vec!["mousedown"]);
        list.push(ZIndex(0), DrawCmd::new(ShapeId(1), ShapeKind::Rect, button.clone()));
        list.push(ZIndex(2), DrawCmd::new(ShapeId(2), ShapeKind::Rect, button));
        list.push(ZIndex(5), DrawCmd::new(ShapeId(3), ShapeKind::Text, Attrs::new()));
        list
    }

    #[test]
    fn clicks_hit_topmost_listener() {
        let mut factory = LogSurfaceFactory::default();
        let pointer = factory.pointer();
        let mut surface = factory.create_surface(SurfaceSize::new(100, 100));
        surface.present(&mut frame());

        pointer.click();
        pointer.click();
        let mut events = Vec::new();
        surface.drain_events(&mut events);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.target == ShapeId(2)));
        assert_eq!(events[0].event, CapturedEvent::new(EventKind::MouseDown));

        events.clear();
        surface.drain_events(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn clicks_without_listener_are_dropped() {
        let mut factory = LogSurfaceFactory::default();
        let pointer = factory.pointer();
        let mut surface = factory.create_surface(SurfaceSize::new(100, 100));
        surface.present(&mut DrawList::new());

        pointer.click();
        let mut events = Vec::new();
        surface.drain_events(&mut events);
        assert!(events.is_empty());

        surface.present(&mut frame());
        surface.drain_events(&mut events);
        assert!(events.is_empty());
    }
}
