use std::time::Instant;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::SurfaceSize;
use crate::core::{App as CoreApp, FrameRequest, HostSignal};
use crate::input::Key;
use crate::time::{Clock, SystemClock};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Zero of the frame timestamps handed to the app. Share it with any
    /// clock the app reads so both timelines agree.
    pub origin: Instant,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "arcade".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            origin: Instant::now(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the host window and drives `app` until the window closes or a
    /// callback fails.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Next frame the app asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Schedule {
    Idle,
    Redraw,
    At(Instant),
}

impl From<FrameRequest> for Schedule {
    fn from(request: FrameRequest) -> Self {
        match request {
            FrameRequest::Idle => Schedule::Idle,
            FrameRequest::Immediate => Schedule::Redraw,
            FrameRequest::After(delay) => Schedule::At(Instant::now() + delay),
        }
    }
}

impl Schedule {
    /// Schedule after a host signal. A pending deadline survives signals
    /// that leave the loop running.
    fn after_signal(self, request: FrameRequest) -> Schedule {
        match (self, Schedule::from(request)) {
            (Schedule::At(deadline), Schedule::Redraw | Schedule::At(_)) => Schedule::At(deadline),
            (_, next) => next,
        }
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,

    window: Option<Window>,
    clock: SystemClock,
    schedule: Schedule,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            clock: SystemClock::with_origin(config.origin),
            config,
            app,
            window: None,
            schedule: Schedule::Idle,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<SurfaceSize> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let container = to_surface_size(window.inner_size());
        self.window = Some(window);
        Ok(container)
    }

    /// Stores the app's next frame request, or the failure that ends the loop.
    fn apply(&mut self, outcome: Result<Schedule>) {
        match outcome {
            Ok(schedule) => self.schedule = schedule,
            Err(e) => {
                log::error!("{e:#}");
                self.failure = Some(e);
                self.request_exit();
            }
        }
    }

    fn signal(&mut self, signal: HostSignal) {
        log::debug!("host signal {signal:?}");
        let pending = self.schedule;
        let outcome = self.app.on_signal(signal).map(|r| pending.after_signal(r));
        self.apply(outcome);
    }

    fn frame(&mut self) {
        let timestamp_ms = self.clock.now_ms();
        let outcome = self.app.on_frame(timestamp_ms).map(Schedule::from);
        self.apply(outcome);
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(container) => self.signal(HostSignal::Ready { container }),
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.failure = Some(e);
                self.request_exit();
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match self.schedule {
            Schedule::Idle => event_loop.set_control_flow(ControlFlow::Wait),
            Schedule::Redraw => {
                self.schedule = Schedule::Idle;
                self.request_redraw();
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Schedule::At(deadline) if deadline <= Instant::now() => {
                self.schedule = Schedule::Idle;
                self.request_redraw();
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Schedule::At(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.window = None;
                self.request_exit();
            }

            WindowEvent::Resized(size) => {
                self.signal(HostSignal::SurfaceResized { container: to_surface_size(size) });
            }

            WindowEvent::Focused(false) => self.signal(HostSignal::FocusLost),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    self.signal(HostSignal::Key(map_key(event.physical_key)));
                }
            }

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn to_surface_size(size: PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(size.width, size.height)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
            KeyCode::Space => Key::Space,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit0,
            KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit1,
            KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit2,
            KeyCode::Digit3 | KeyCode::Numpad3 => Key::Digit3,
            KeyCode::Digit4 | KeyCode::Numpad4 => Key::Digit4,
            KeyCode::Digit5 | KeyCode::Numpad5 => Key::Digit5,
            KeyCode::Digit6 | KeyCode::Numpad6 => Key::Digit6,
            KeyCode::Digit7 | KeyCode::Numpad7 => Key::Digit7,
            KeyCode::Digit8 | KeyCode::Numpad8 => Key::Digit8,
            KeyCode::Digit9 | KeyCode::Numpad9 => Key::Digit9,

            _ => Key::Unknown(0),
        },

        // NativeKeyCode is not a u32 in winit 0.30; keep "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
