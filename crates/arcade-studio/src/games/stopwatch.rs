use anyhow::Result;

use arcade_engine::context::{FrameCtx, RedrawCtx};
use arcade_engine::input::EventKind;
use arcade_engine::scene::Attrs;
use arcade_host::{Game, GameInfo};

const TIME: &str = "text%time%0";
const BUTTON: &str = "rect%button%0";
const LABEL_START: &str = "text%label%start";
const LABEL_STOP: &str = "text%label%stop";

/// Stopwatch driven by the session clock; the button starts and stops it.
///
/// Time is read from `number_millisecond`, which skips the time the loop
/// spends stopped and carries over engine replacement.
pub struct Stopwatch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopwatchState {
    running: bool,
    elapsed_ms: f64,
    last_clock_ms: Option<f64>,
}

impl StopwatchState {
    fn label(&self) -> (&'static str, &'static str) {
        if self.running { (LABEL_STOP, "Stop") } else { (LABEL_START, "Start") }
    }
}

fn format_elapsed(ms: f64) -> String {
    let total = (ms / 10.0) as u64;
    format!("{:02}:{:02}.{:02}", total / 6000, total / 100 % 60, total % 100)
}

impl Game for Stopwatch {
    type Data = StopwatchState;

    fn info(&self) -> GameInfo {
        GameInfo::new("Stopwatch", "Click the button to start and stop", "junkrat")
            .with_aspect_ratio(16.0 / 9.0)
            .with_feature_tags(["shape:rect", "shape:text", "event:mousedown"])
    }

    fn create(&self) -> StopwatchState {
        log::debug!("stopwatch created");
        StopwatchState::default()
    }

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &StopwatchState) -> Result<()> {
        ctx.create("rect%background%0").rect(
            Attrs::new()
                .with("x", 0.0)
                .with("y", 0.0)
                .with("width", 1.0)
                .with("height", 1.0)
                .with("fill", "#202830")
                .with("zIndex", -1),
        )?;
        ctx.create(TIME).text(
            Attrs::new()
                .with("x", 0.3)
                .with("y", 0.3)
                .with("fontSize", 0.15)
                .with("fill", "white")
                .with("text", format_elapsed(data.elapsed_ms)),
        )?;
        ctx.create(BUTTON).rect(
            Attrs::new()
                .with("x", 0.4)
                .with("y", 0.65)
                .with("width", 0.2)
                .with("height", 0.12)
                .with("fill", "#3a7bd5")
                .with("eventList", vec!["mousedown"]),
        )?;

        let (identifier, text) = data.label();
        ctx.create(identifier).text(
            Attrs::new()
                .with("x", 0.45)
                .with("y", 0.68)
                .with("fontSize", 0.06)
                .with("fill", "white")
                .with("text", text)
                .with("zIndex", 1),
        )?;
        Ok(())
    }

    fn on_frame(&self, ctx: &mut FrameCtx<'_>, mut data: StopwatchState) -> Result<StopwatchState> {
        let now = ctx.system().number_millisecond;

        if data.running {
            if let Some(last) = data.last_clock_ms {
                data.elapsed_ms += (now - last).max(0.0);
            }
            ctx.update(TIME, Attrs::new().with("text", format_elapsed(data.elapsed_ms)))?;
        }
        data.last_clock_ms = Some(now);

        if ctx.dequeue_event(BUTTON, EventKind::MouseDown).is_some() {
            let (old, _) = data.label();
            data.running = !data.running;
            let (new, text) = data.label();
            ctx.update(old, Attrs::new().with("identifier", new).with("text", text))?;
        }

        Ok(data)
    }
}
