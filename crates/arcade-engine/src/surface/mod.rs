//! Drawable surface abstraction.
//!
//! A surface is the host-side resource an engine renders into (a canvas, a
//! window region, an offscreen buffer). The engine creates exactly one through
//! a `SurfaceFactory` at set up and destroys it at clean up; nothing else
//! touches it in between.

mod headless;

pub use headless::{HeadlessSurface, HeadlessSurfaceFactory};

use crate::coords::SurfaceSize;
use crate::input::SurfaceEvent;
use crate::scene::DrawList;

/// A drawable surface bound to one engine.
pub trait Surface {
    /// Size the surface was created with.
    fn size(&self) -> SurfaceSize;

    /// Draws one frame.
    fn present(&mut self, list: &mut DrawList);

    /// Moves events captured since the previous call into `out`.
    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        let _ = out;
    }

    /// Releases the host resource. Called once, after the engine has stopped.
    fn destroy(&mut self) {}
}

/// Host hook that allocates surfaces.
pub trait SurfaceFactory {
    fn create_surface(&mut self, size: SurfaceSize) -> Box<dyn Surface>;
}

