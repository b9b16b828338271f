//! Per-game rendering engine.
//!
//! An `Engine` owns one surface, one drawable layer and one context provider.
//! It is created for a single game session, driven by `tick` once per host
//! frame, and consumed by `clean_up`. Replacing the surface (after a resize)
//! means building a new engine and seeding it with the old one's counters.
//!
//! The engine never decides when to tick; it reports a [`Wake`] and leaves the
//! scheduling to the host.

mod error;
mod tick;

pub use error::EngineError;
pub use tick::{FrameDelegate, Tick, Wake};

use log::{debug, info, trace};

use crate::context::{
    Access, ContextProvider, ContextRevision, FrameCtx, RedrawCtx, SystemSnapshot,
};
use crate::coords::SurfaceSize;
use crate::input::SurfaceEvent;
use crate::scene::{DrawList, Layer, ShapeId};
use crate::surface::{Surface, SurfaceFactory};
use crate::time::{StatsSeed, SystemStats};

/// Capability tags advertised by this engine.
///
/// A game is playable only if every tag it requires is listed here.
pub const FEATURE_TAGS: &[&str] = &[
    "engine:arcade",
    "context:junkrat",
    "shape:rect",
    "shape:ellipse",
    "shape:line",
    "shape:image",
    "shape:text",
    "event:mouseenter",
    "event:mouseleave",
    "event:mousedown",
    "event:mouseup",
];

/// Parameters for [`Engine::set_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Size of the host container the surface must fit into.
    pub container: SurfaceSize,
    /// Width / height ratio the surface keeps, or `None` to fill the container.
    pub aspect_ratio: Option<f64>,
    /// Context revision the game is written against, e.g. `"junkrat"`.
    pub context_revision: String,
    /// Counters to continue from.
    pub seed: StatsSeed,
}

/// Everything that only exists between `set_up` and `clean_up`.
struct Stage {
    surface: Box<dyn Surface>,
    size: SurfaceSize,
    layer: Layer,
    provider: Box<dyn ContextProvider>,
    draw_list: DrawList,
    captured: Vec<SurfaceEvent>,
}

impl Stage {
    fn access(&mut self) -> Access<'_> {
        Access {
            provider: &mut *self.provider,
            layer: &mut self.layer,
            size: self.size,
        }
    }

    fn capture_events(&mut self) {
        self.surface.drain_events(&mut self.captured);

        let mut dropped = 0usize;
        for event in self.captured.drain(..) {
            if !self.provider.capture(&self.layer, event) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            trace!("dropped {dropped} surface event(s) without listener");
        }
    }

    fn snapshot(&self, system: &SystemStats, timestamp: f64) -> SystemSnapshot {
        SystemSnapshot {
            timestamp,
            number_frame: system.number_frame,
            number_millisecond: system.number_millisecond,
            engine_number_frame: system.engine_number_frame,
            engine_number_millisecond: system.engine_number_millisecond,
            width: self.size.width,
            height: self.size.height,
            aspect_ratio: self.size.aspect_ratio(),
        }
    }
}

/// Renders one game session onto one surface.
pub struct Engine {
    stage: Option<Stage>,
    running: bool,
    pre_frame: bool,
    system: SystemStats,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            stage: None,
            running: false,
            pre_frame: false,
            system: SystemStats::default(),
        }
    }

    #[inline]
    pub fn feature_tags() -> &'static [&'static str] {
        FEATURE_TAGS
    }

    /// Creates the surface, the layer and the context provider.
    ///
    /// The surface is sized to the largest rectangle of the configured aspect
    /// ratio that fits `config.container`.
    pub fn set_up(
        &mut self,
        config: EngineConfig,
        surfaces: &mut dyn SurfaceFactory,
    ) -> Result<(), EngineError> {
        if self.stage.is_some() {
            return Err(EngineError::AlreadySetUp);
        }

        let revision = ContextRevision::parse(&config.context_revision)
            .ok_or_else(|| EngineError::UnknownRevision(config.context_revision.clone()))?;

        let size = config.container.fit(config.aspect_ratio);
        info!(
            "creating stage {}x{} in container {}x{} (context {revision})",
            size.width, size.height, config.container.width, config.container.height
        );

        let surface = surfaces.create_surface(size);

        self.stage = Some(Stage {
            surface,
            size,
            layer: Layer::new(),
            provider: revision.provider(),
            draw_list: DrawList::new(),
            captured: Vec::new(),
        });
        self.system = SystemStats::seeded(config.seed);
        self.running = false;
        self.pre_frame = false;
        Ok(())
    }

    /// Destroys the surface and everything drawn on it.
    pub fn clean_up(mut self) {
        self.running = false;
        if let Some(mut stage) = self.stage.take() {
            info!("cleaning up stage ({} drawables)", stage.layer.len());
            stage.surface.destroy();
        }
    }

    /// Starts the loop. With `pre_frame`, the first tick draws the current
    /// layer without running the game update.
    pub fn start(&mut self, pre_frame: bool) -> Result<(), EngineError> {
        if self.stage.is_none() {
            return Err(EngineError::NotSetUp);
        }
        self.running = true;
        self.pre_frame = pre_frame;
        self.system.rebase();
        info!("starting rendering loop (pre-frame: {pre_frame})");
        Ok(())
    }

    /// Requests the loop to stop. The next tick returns [`Tick::Stopped`].
    pub fn stop(&mut self) {
        if self.running {
            debug!("stop requested");
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_set_up(&self) -> bool {
        self.stage.is_some()
    }

    #[inline]
    pub fn has_pending_pre_frame(&self) -> bool {
        self.pre_frame
    }

    #[inline]
    pub fn system(&self) -> &SystemStats {
        &self.system
    }

    /// Size of the surface, once set up.
    pub fn size(&self) -> Option<SurfaceSize> {
        self.stage.as_ref().map(|s| s.size)
    }

    pub fn context_revision(&self) -> Option<ContextRevision> {
        self.stage.as_ref().map(|s| s.provider.revision())
    }

    pub fn layer(&self) -> Option<&Layer> {
        self.stage.as_ref().map(|s| &s.layer)
    }

    /// Drawable currently mapped to `identifier`.
    pub fn resolve(&self, identifier: &str) -> Option<ShapeId> {
        self.stage.as_ref().and_then(|s| s.provider.resolve(identifier))
    }

    /// Context for a game's redraw at `timestamp`.
    pub fn redraw_context(&mut self, timestamp: f64) -> Result<RedrawCtx<'_>, EngineError> {
        let stage = self.stage.as_mut().ok_or(EngineError::NotSetUp)?;
        let system = stage.snapshot(&self.system, timestamp);
        Ok(RedrawCtx::new(stage.access(), system))
    }

    /// Context for a game update at `timestamp`, outside of a tick.
    pub fn frame_context(&mut self, timestamp: f64) -> Result<FrameCtx<'_>, EngineError> {
        let stage = self.stage.as_mut().ok_or(EngineError::NotSetUp)?;
        let system = stage.snapshot(&self.system, timestamp);
        Ok(FrameCtx::new(stage.access(), system))
    }

    /// Runs one frame.
    ///
    /// In order: captured events are queued, the game update runs (unless this
    /// is the pre-frame), the layer is drawn and presented, and the frame is
    /// counted.
    pub fn tick(
        &mut self,
        timestamp: f64,
        delegate: &mut dyn FrameDelegate,
    ) -> Result<Tick, EngineError> {
        if !self.running {
            info!("exiting rendering loop");
            return Ok(Tick::Stopped);
        }
        let stage = self.stage.as_mut().ok_or(EngineError::NotSetUp)?;

        stage.capture_events();

        let updated = if self.pre_frame {
            self.pre_frame = false;
            trace!("pre-frame at {timestamp:.1}ms");
            false
        } else {
            let system = stage.snapshot(&self.system, timestamp);
            let mut ctx = FrameCtx::new(stage.access(), system);
            delegate.on_game_update(&mut ctx).map_err(EngineError::from_game)?;
            true
        };

        stage.layer.draw(&mut stage.draw_list);
        stage.surface.present(&mut stage.draw_list);

        self.system.record_frame(timestamp);

        Ok(Tick::Ran {
            updated,
            wake: Wake::from_throttle(delegate.throttle_timeout()),
        })
    }
}
