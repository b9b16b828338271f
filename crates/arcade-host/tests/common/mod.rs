//! Test doubles shared by the host integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arcade_engine::context::{FrameCtx, RedrawCtx};
use arcade_engine::coords::SurfaceSize;
use arcade_engine::input::SurfaceEvent;
use arcade_engine::scene::{Attrs, DrawList};
use arcade_engine::surface::{Surface, SurfaceFactory};
use arcade_engine::time::ManualClock;
use arcade_host::{Application, CapabilityPolicy, Game, GameEntry, GameInfo, Menu};

// ── surfaces ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetUp { surface: usize, size: SurfaceSize },
    Present { surface: usize, items: usize },
    Destroy { surface: usize },
}

pub type SurfaceLog = Rc<RefCell<Vec<SurfaceCall>>>;

pub struct RecordingSurface {
    id: usize,
    size: SurfaceSize,
    log: SurfaceLog,
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, list: &mut DrawList) {
        self.log.borrow_mut().push(SurfaceCall::Present { surface: self.id, items: list.len() });
    }

    fn drain_events(&mut self, out: &mut Vec<SurfaceEvent>) {
        out.append(&mut self.events.borrow_mut());
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push(SurfaceCall::Destroy { surface: self.id });
    }
}

#[derive(Default)]
pub struct RecordingFactory {
    pub log: SurfaceLog,
    /// Events the next `drain_events` of any surface hands out.
    pub events: Rc<RefCell<Vec<SurfaceEvent>>>,
    created: usize,
}

impl SurfaceFactory for RecordingFactory {
    fn create_surface(&mut self, size: SurfaceSize) -> Box<dyn Surface> {
        let id = self.created;
        self.created += 1;
        self.log.borrow_mut().push(SurfaceCall::SetUp { surface: id, size });
        Box::new(RecordingSurface {
            id,
            size,
            log: self.log.clone(),
            events: self.events.clone(),
        })
    }
}

pub fn count(log: &SurfaceLog, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
    log.borrow().iter().filter(|c| pred(c)).count()
}

// ── menu ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum MenuCall {
    Create(Vec<GameEntry>),
    Attach,
    Show,
    Hide,
    GameName(String),
    Fps(u32),
    Update(Vec<GameEntry>),
}

#[derive(Default)]
pub struct RecordingMenu {
    pub calls: Vec<MenuCall>,
}

impl RecordingMenu {
    pub fn fps_reports(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MenuCall::Fps(fps) => Some(*fps),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&MenuCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn last_update(&self) -> Option<&[GameEntry]> {
        self.calls.iter().rev().find_map(|c| match c {
            MenuCall::Update(entries) => Some(entries.as_slice()),
            _ => None,
        })
    }
}

impl Menu for RecordingMenu {
    fn create_element(&mut self, games: &[GameEntry]) {
        self.calls.push(MenuCall::Create(games.to_vec()));
    }

    fn attach_element(&mut self) {
        self.calls.push(MenuCall::Attach);
    }

    fn show_modal(&mut self) {
        self.calls.push(MenuCall::Show);
    }

    fn hide_modal(&mut self) {
        self.calls.push(MenuCall::Hide);
    }

    fn set_game_name(&mut self, name: &str) {
        self.calls.push(MenuCall::GameName(name.to_string()));
    }

    fn set_fps(&mut self, fps: u32) {
        self.calls.push(MenuCall::Fps(fps));
    }

    fn update_game_list(&mut self, games: &[GameEntry]) {
        self.calls.push(MenuCall::Update(games.to_vec()));
    }
}

// ── games ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Calls {
    pub create: usize,
    pub redraw: usize,
    pub on_frame: usize,
    /// Data value seen by each redraw.
    pub redraw_data: Vec<u32>,
}

/// Game whose state is the number of frames it has seen.
pub struct ScriptedGame {
    pub info: GameInfo,
    pub calls: Rc<RefCell<Calls>>,
    pub fail_on_frame: bool,
    /// Shared so a test can break drawing after the game has started.
    pub fail_on_redraw: Rc<Cell<bool>>,
}

impl ScriptedGame {
    pub fn new(name: &str, tags: &[&str]) -> Self {
        Self {
            info: GameInfo::new(name, format!("{name} test game"), "junkrat")
                .with_feature_tags(tags.iter().copied()),
            calls: Rc::default(),
            fail_on_frame: false,
            fail_on_redraw: Rc::default(),
        }
    }

    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.info.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_revision(mut self, revision: &str) -> Self {
        self.info.context_revision = revision.to_string();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_on_frame = true;
        self
    }

    pub fn failing_redraw(mut self) -> Self {
        self.fail_on_redraw.set(true);
        self
    }
}

impl Game for ScriptedGame {
    type Data = u32;

    fn info(&self) -> GameInfo {
        self.info.clone()
    }

    fn create(&self) -> u32 {
        self.calls.borrow_mut().create += 1;
        0
    }

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &u32) -> anyhow::Result<()> {
        let mut calls = self.calls.borrow_mut();
        calls.redraw += 1;
        calls.redraw_data.push(*data);
        if self.fail_on_redraw.get() {
            anyhow::bail!("{} cannot draw", self.info.name);
        }

        ctx.create(format!("text%{}", self.info.name))
            .text(Attrs::new().with("x", 0.5).with("y", 0.5).with("text", data.to_string()))?;
        Ok(())
    }

    fn on_frame(&self, ctx: &mut FrameCtx<'_>, data: u32) -> anyhow::Result<u32> {
        self.calls.borrow_mut().on_frame += 1;
        if self.fail_on_frame {
            anyhow::bail!("{} crashed", self.info.name);
        }
        let next = data + 1;
        ctx.update(
            &format!("text%{}", self.info.name),
            Attrs::new().with("text", next.to_string()),
        )?;
        Ok(next)
    }
}

// ── fixture ──────────────────────────────────────────────────────────────

pub const CONTAINER: SurfaceSize = SurfaceSize::new(800, 600);

pub struct Fixture {
    pub app: Application<RecordingMenu>,
    pub surfaces: SurfaceLog,
    pub events: Rc<RefCell<Vec<SurfaceEvent>>>,
    pub clock: ManualClock,
}

impl Fixture {
    /// Application that has already received its container.
    pub fn ready() -> Self {
        let mut fixture = Self::new();
        fixture.app.on_ready(CONTAINER);
        fixture
    }

    pub fn new() -> Self {
        Self::with_policy(CapabilityPolicy::default())
    }

    pub fn with_policy(policy: CapabilityPolicy) -> Self {
        let factory = RecordingFactory::default();
        let surfaces = factory.log.clone();
        let events = factory.events.clone();
        let clock = ManualClock::new(0.0);
        let app = Application::new(RecordingMenu::default(), factory)
            .with_clock(clock.clone())
            .with_capability_policy(policy);
        Self { app, surfaces, events, clock }
    }

    pub fn register(&mut self, game: ScriptedGame) -> (arcade_host::GameKey, Rc<RefCell<Calls>>) {
        let calls = game.calls.clone();
        (self.app.register_game(game), calls)
    }

    /// Drives frames at a fixed interval starting at `from`.
    pub fn frames(&mut self, from: f64, interval: f64, n: usize) {
        for i in 0..n {
            self.app.on_frame(from + interval * i as f64).unwrap();
        }
    }
}
