use anyhow::Result;

use arcade_engine::context::{FrameCtx, RedrawCtx, SystemSnapshot};
use arcade_engine::input::EventKind;
use arcade_engine::scene::Attrs;
use arcade_host::{Game, GameInfo};

const SYSTEM_TIME: &str = "text%system-time%0";
const DESCRIPTION: &str = "text%event-description%0";
const NUMBER_EVENT: &str = "text%number-event%0";
const STAGE: &str = "rect%stage%0";

/// Event tester: counts keydown and click events.
///
/// Needs `event:click` and `event:keydown`, which the engine does not
/// advertise, so the menu lists it as unsupported.
pub struct TestEvents;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestEventsState {
    number_event: u32,
}

fn system_time_text(system: &SystemSnapshot) -> String {
    format!("System time: {:.2}ms", system.number_millisecond)
}

fn number_event_text(number_event: u32) -> String {
    format!("Number of events: {number_event}")
}

fn text_common() -> Attrs {
    Attrs::new()
        .with("x", 0.0)
        .with("fontSize", 0.03)
        .with("fontFamily", "Lato")
        .with("fill", "black")
}

impl Game for TestEvents {
    type Data = TestEventsState;

    fn info(&self) -> GameInfo {
        GameInfo::new("Test Events", "Counts clicks and key presses", "junkrat")
            .with_feature_tags(["shape:text", "event:keydown", "event:click"])
    }

    fn create(&self) -> TestEventsState {
        TestEventsState::default()
    }

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &TestEventsState) -> Result<()> {
        let time = system_time_text(ctx.system());

        let mut attrs = text_common()
            .with("y", 0.0)
            .with("text", time)
            .with("eventList", vec!["click"]);
        ctx.create(SYSTEM_TIME).text(attrs)?;

        attrs = text_common()
            .with("y", 0.04)
            .with("text", "Wait for the first event (since last redraw)");
        ctx.create(DESCRIPTION).text(attrs)?;

        attrs = text_common().with("y", 0.08).with("text", number_event_text(data.number_event));
        ctx.create(NUMBER_EVENT).text(attrs)?;

        ctx.create(STAGE).rect(
            Attrs::new()
                .with("x", 0.0)
                .with("y", 0.0)
                .with("width", 1.0)
                .with("height", 1.0)
                .with("eventList", vec!["keydown"])
                .with("zIndex", -1),
        )?;
        Ok(())
    }

    fn on_frame(&self, ctx: &mut FrameCtx<'_>, data: TestEventsState) -> Result<TestEventsState> {
        let time = system_time_text(ctx.system());
        ctx.update(SYSTEM_TIME, Attrs::new().with("text", time))?;

        // at most one event per frame
        let description = if let Some(key) = ctx.dequeue_event(STAGE, EventKind::KeyDown) {
            Some(format!("keydown: key = {}", key.detail.as_deref().unwrap_or("?")))
        } else if ctx.dequeue_event(SYSTEM_TIME, EventKind::Click).is_some() {
            Some("system time is clicked".to_string())
        } else {
            None
        };

        let Some(description) = description else {
            return Ok(data);
        };
        ctx.update(DESCRIPTION, Attrs::new().with("text", description))?;

        let number_event = data.number_event + 1;
        ctx.update(NUMBER_EVENT, Attrs::new().with("text", number_event_text(number_event)))?;
        Ok(TestEventsState { number_event })
    }
}
