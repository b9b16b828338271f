//! Session orchestrator.
//!
//! `Application` owns the game registry, the single session and the menu. It
//! decides, on every selection, whether to start a new session, resume the
//! paused one as is, or rebuild its engine first; and it forwards each host
//! frame to the engine with itself as the update delegate.
//!
//! ```text
//! NoSession ──select(g)──▶ Running(g) ──pause / focus lost / resize──▶ Paused(g)
//!                              ▲                                          │
//!                              └───────────── select(g) (resume) ◀────────┘
//!                                             select(g') (new session)
//! ```

use std::mem;

use log::{debug, info, warn};

use arcade_engine::context::FrameCtx;
use arcade_engine::coords::SurfaceSize;
use arcade_engine::core::{App, FrameRequest, HostSignal};
use arcade_engine::engine::FrameDelegate;
use arcade_engine::surface::SurfaceFactory;
use arcade_engine::time::{Clock, FpsMeter, StatsSeed, SystemClock};
use arcade_engine::{Engine, EngineConfig, EngineError, Tick, Wake, FEATURE_TAGS};

use crate::error::AppError;
use crate::game::{ErasedGame, GameData, GameInfo};
use crate::menu::Menu;
use crate::registry::{CapabilityPolicy, GameEntry, GameKey, GameRegistry};
use crate::session::{Session, SessionState};
use crate::Game;

/// Debug knobs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DebugSettings {
    /// Delay between ticks, in milliseconds.
    pub throttle_timeout: Option<f64>,
}

/// Single-session game host.
pub struct Application<M: Menu> {
    registry: GameRegistry,
    menu: M,
    surfaces: Box<dyn SurfaceFactory>,
    clock: Box<dyn Clock>,
    debug: DebugSettings,

    session: Option<Session>,
    container: Option<SurfaceSize>,
    paused: bool,
    replace_engine_before_resume: bool,
}

impl<M: Menu> Application<M> {
    pub fn new(menu: M, surfaces: impl SurfaceFactory + 'static) -> Self {
        Self {
            registry: GameRegistry::new(FEATURE_TAGS, CapabilityPolicy::default()),
            menu,
            surfaces: Box::new(surfaces),
            clock: Box::new(SystemClock::new()),
            debug: DebugSettings::default(),
            session: None,
            container: None,
            paused: true,
            replace_engine_before_resume: false,
        }
    }

    /// Replaces the clock used for start and resume timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_capability_policy(mut self, policy: CapabilityPolicy) -> Self {
        self.registry.set_policy(policy);
        self
    }

    // ── registry ─────────────────────────────────────────────────────────

    pub fn register_game<G>(&mut self, game: G) -> GameKey
    where
        G: Game + 'static,
    {
        self.registry.register(game)
    }

    pub fn register_erased_game(&mut self, game: Box<dyn ErasedGame>) -> GameKey {
        self.registry.register_erased(game)
    }

    /// Yields the menu view of every registered game, in registration order.
    pub fn for_each_game(&self, mut consumer: impl FnMut(GameEntry)) {
        for entry in self.game_entries() {
            consumer(entry);
        }
    }

    pub fn game_entries(&self) -> Vec<GameEntry> {
        self.registry.entries(self.session.as_ref().map(|s| s.game), self.replace_engine_before_resume)
    }

    pub fn game_info(&self, key: GameKey) -> Option<&GameInfo> {
        self.registry.get(key).map(|g| g.info())
    }

    // ── state ────────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        match &self.session {
            None => SessionState::NoSession,
            Some(s) if self.paused => SessionState::Paused(s.game),
            Some(s) => SessionState::Running(s.game),
        }
    }

    /// True exactly while the selection modal is shown.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the next resume rebuilds the engine.
    #[inline]
    pub fn will_restart(&self) -> bool {
        self.replace_engine_before_resume
    }

    #[inline]
    pub fn menu(&self) -> &M {
        &self.menu
    }

    #[inline]
    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    /// Engine of the current session.
    pub fn engine(&self) -> Option<&Engine> {
        self.session.as_ref().map(|s| &s.engine)
    }

    /// Session-level timing counters.
    pub fn fps_meter(&self) -> Option<&FpsMeter> {
        self.session.as_ref().map(|s| &s.fps)
    }

    /// State of the current session's game.
    pub fn session_data(&self) -> Option<&GameData> {
        self.session.as_ref().map(|s| &s.data)
    }

    // ── debug ────────────────────────────────────────────────────────────

    /// Limits the frame rate to `max_fps` by delaying every tick.
    ///
    /// # Panics
    ///
    /// Panics if `max_fps` is not a positive number.
    pub fn set_throttle(&mut self, max_fps: f64) {
        assert!(max_fps > 0.0, "max fps must be positive (got {max_fps})");
        self.debug.throttle_timeout = Some(1000.0 / max_fps);
        debug!("throttle set to {max_fps} fps");
    }

    pub fn clear_throttle(&mut self) {
        self.debug.throttle_timeout = None;
    }

    #[inline]
    pub fn throttle_timeout(&self) -> Option<f64> {
        self.debug.throttle_timeout
    }

    #[inline]
    pub fn debug_settings(&self) -> DebugSettings {
        self.debug
    }

    // ── host signals ─────────────────────────────────────────────────────

    /// Builds and shows the menu once the host container exists.
    pub fn on_ready(&mut self, container: SurfaceSize) {
        info!("on ready ({}x{})", container.width, container.height);
        self.container = Some(container);
        let entries = self.game_entries();
        self.menu.create_element(&entries);
        self.menu.attach_element();
        self.menu.show_modal();
    }

    /// Invalidates the current surface and returns to the menu.
    ///
    /// The engine is only rebuilt on the next resume.
    pub fn on_surface_resized(&mut self, container: SurfaceSize) {
        debug!("container resized to {}x{}", container.width, container.height);
        self.container = Some(container);
        self.paused = true;
        if let Some(session) = self.session.as_mut() {
            session.engine.stop();
            self.replace_engine_before_resume = true;
        }
        self.show_menu();
    }

    pub fn on_focus_lost(&mut self) {
        if !self.paused {
            self.pause();
        }
    }

    /// Stops the session and shows the menu. Pausing twice is a no-op.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        info!("game is paused");
        self.paused = true;
        if let Some(session) = self.session.as_mut() {
            session.engine.stop();
        }
        self.show_menu();
    }

    fn show_menu(&mut self) {
        let entries = self.game_entries();
        self.menu.update_game_list(&entries);
        self.menu.show_modal();
    }

    // ── selection ────────────────────────────────────────────────────────

    /// Runs the game registered as `key`.
    ///
    /// Resumes the session if it already belongs to this game, otherwise
    /// replaces it with a new one.
    pub fn select(&mut self, key: GameKey) -> Result<(), AppError> {
        let game = self.registry.get(key).ok_or(AppError::UnknownGame(key))?;
        let name = game.info().name.clone();
        if self.registry.is_supported(key) != Some(true) {
            return Err(AppError::UnsupportedGame { name });
        }
        let container = self.container.ok_or(AppError::NotReady)?;

        info!("game {name} is selected");
        let current = self.session.as_ref().map(|s| s.game);

        if current == Some(key) && !self.paused {
            debug!("game {name} is already running");
            self.menu.hide_modal();
            return Ok(());
        }

        let started = if current == Some(key) {
            self.resume_game(container)
        } else {
            self.start_game(key, container)
        };
        if let Err(err) = started {
            warn!("could not run game {name}: {err}");
            self.paused = true;
            self.show_menu();
            return Err(err);
        }

        self.paused = false;
        self.menu.set_game_name(&name);
        self.menu.hide_modal();
        Ok(())
    }

    fn start_game(&mut self, key: GameKey, container: SurfaceSize) -> Result<(), AppError> {
        let game = self.registry.get(key).ok_or(AppError::UnknownGame(key))?;
        let info = game.info();
        info!("start game {}", info.name);
        let now = self.clock.now_ms();

        if let Some(old) = self.session.take() {
            old.end();
        }
        self.replace_engine_before_resume = false;

        let data = game.create();
        let config = engine_config(info, container, StatsSeed::default());
        let engine = launch_engine(game, config, &mut *self.surfaces, &data, now)?;

        self.session = Some(Session {
            game: key,
            data,
            engine,
            fps: FpsMeter::new(now),
        });
        Ok(())
    }

    fn resume_game(&mut self, container: SurfaceSize) -> Result<(), AppError> {
        info!("resume the game");
        let now = self.clock.now_ms();
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let game = self
            .registry
            .get(session.game)
            .ok_or(AppError::UnknownGame(session.game))?;

        if !self.replace_engine_before_resume {
            session.fps.rebase(now);
            session.engine.start(false)?;
            return Ok(());
        }

        self.replace_engine_before_resume = false;
        let old = mem::replace(&mut session.engine, Engine::new());
        let seed = old.system().seed();
        old.clean_up();

        let config = engine_config(game.info(), container, seed);
        match launch_engine(game, config, &mut *self.surfaces, &session.data, now) {
            Ok(engine) => {
                session.engine = engine;
                session.fps = FpsMeter::new(now);
                Ok(())
            }
            Err(err) => {
                // The old engine is gone; the session cannot be resumed.
                self.session = None;
                Err(err.into())
            }
        }
    }

    // ── frames ───────────────────────────────────────────────────────────

    /// Runs one engine tick and reports the frame rate.
    pub fn on_frame(&mut self, timestamp: f64) -> Result<FrameRequest, AppError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(FrameRequest::Idle);
        };
        let game = self
            .registry
            .get(session.game)
            .ok_or(AppError::UnknownGame(session.game))?;

        let mut update = SessionUpdate {
            game,
            data: &mut session.data,
            throttle_timeout: self.debug.throttle_timeout,
        };

        let tick = match session.engine.tick(timestamp, &mut update) {
            Ok(tick) => tick,
            Err(err) => {
                warn!("ending session after a failed frame: {err}");
                if let Some(session) = self.session.take() {
                    session.end();
                }
                self.paused = true;
                self.show_menu();
                return Err(err.into());
            }
        };

        match tick {
            Tick::Stopped => Ok(FrameRequest::Idle),
            Tick::Ran { wake, .. } => {
                if let Some(fps) = session.fps.record_frame(timestamp) {
                    self.menu.set_fps(fps);
                }
                Ok(frame_request(wake))
            }
        }
    }

    /// Frame the host should schedule next, given the current state.
    pub fn frame_request(&self) -> FrameRequest {
        match &self.session {
            Some(session) if session.engine.is_running() => FrameRequest::Immediate,
            _ => FrameRequest::Idle,
        }
    }
}

impl<M: Menu> App for Application<M> {
    fn on_signal(&mut self, signal: HostSignal) -> anyhow::Result<FrameRequest> {
        match signal {
            HostSignal::Ready { container } => self.on_ready(container),
            HostSignal::SurfaceResized { container } => self.on_surface_resized(container),
            HostSignal::FocusLost => self.on_focus_lost(),
            HostSignal::Key(key) => debug!("unbound key {key}"),
        }
        Ok(self.frame_request())
    }

    fn on_frame(&mut self, timestamp_ms: f64) -> anyhow::Result<FrameRequest> {
        Ok(Application::on_frame(self, timestamp_ms)?)
    }
}

/// Frame delegate binding the session's game to its state for one tick.
struct SessionUpdate<'a> {
    game: &'a dyn ErasedGame,
    data: &'a mut GameData,
    throttle_timeout: Option<f64>,
}

impl FrameDelegate for SessionUpdate<'_> {
    fn on_game_update(&mut self, ctx: &mut FrameCtx<'_>) -> anyhow::Result<()> {
        self.game.on_frame(ctx, self.data)
    }

    fn throttle_timeout(&self) -> Option<f64> {
        self.throttle_timeout
    }
}

fn engine_config(info: &GameInfo, container: SurfaceSize, seed: StatsSeed) -> EngineConfig {
    EngineConfig {
        container,
        aspect_ratio: info.aspect_ratio,
        context_revision: info.context_revision.clone(),
        seed,
    }
}

/// Sets up a fresh engine, draws the game's state on it and starts it with a
/// pre-frame. A failed step destroys the surface before returning.
fn launch_engine(
    game: &dyn ErasedGame,
    config: EngineConfig,
    surfaces: &mut dyn SurfaceFactory,
    data: &GameData,
    timestamp: f64,
) -> Result<Engine, EngineError> {
    let mut engine = Engine::new();
    engine.set_up(config, surfaces)?;
    let drawn = redraw(game, &mut engine, data, timestamp).and_then(|()| engine.start(true));
    match drawn {
        Ok(()) => Ok(engine),
        Err(err) => {
            engine.clean_up();
            Err(err)
        }
    }
}

fn redraw(
    game: &dyn ErasedGame,
    engine: &mut Engine,
    data: &GameData,
    timestamp: f64,
) -> Result<(), EngineError> {
    let mut ctx = engine.redraw_context(timestamp)?;
    game.redraw(&mut ctx, data).map_err(EngineError::from_game)
}

fn frame_request(wake: Wake) -> FrameRequest {
    match wake {
        Wake::Immediate => FrameRequest::Immediate,
        Wake::After(delay) => FrameRequest::After(delay),
    }
}

impl<M: Menu> Drop for Application<M> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if session.engine.is_running() {
                warn!("dropping application with a running session");
            }
            session.end();
        }
    }
}
