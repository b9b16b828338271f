mod games;
mod menu;
mod studio;
mod surface;

use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use arcade_engine::logging::{init_logging, LoggingConfig};
use arcade_engine::time::SystemClock;
use arcade_engine::window::{Runtime, RuntimeConfig};
use arcade_host::Application;

use menu::LogMenu;
use studio::Studio;
use surface::LogSurfaceFactory;

/// Caps the frame rate when set, e.g. `ARCADE_MAX_FPS=5`.
const MAX_FPS_VAR: &str = "ARCADE_MAX_FPS";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ARCADE STUDIO");
    println!("  1-9  select a game from the menu");
    println!("  Spc  click the game's button");
    println!("  Esc  pause and show the menu");
    println!();

    let origin = Instant::now();
    let surfaces = LogSurfaceFactory::default();
    let pointer = surfaces.pointer();
    let mut app = Application::new(LogMenu::default(), surfaces)
        .with_clock(SystemClock::with_origin(origin));
    games::register_all(&mut app);

    if let Some(max_fps) = max_fps_from_env()? {
        app.set_throttle(max_fps);
    }

    Runtime::run(
        RuntimeConfig {
            title: "Arcade Studio".to_string(),
            initial_size: LogicalSize::new(960.0, 640.0),
            origin,
        },
        Studio::new(app, pointer),
    )
}

fn max_fps_from_env() -> Result<Option<f64>> {
    let Ok(raw) = std::env::var(MAX_FPS_VAR) else {
        return Ok(None);
    };
    let max_fps: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{MAX_FPS_VAR} must be a number, got {raw:?}"))?;
    anyhow::ensure!(max_fps > 0.0, "{MAX_FPS_VAR} must be positive, got {max_fps}");
    Ok(Some(max_fps))
}
