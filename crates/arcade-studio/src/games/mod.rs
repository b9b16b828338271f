//! Sample games shipped with the studio.

mod stopwatch;
mod test_events;

pub use stopwatch::Stopwatch;
pub use test_events::TestEvents;

use arcade_host::{Application, Menu};

/// Registers every sample game, in menu order.
pub fn register_all<M: Menu>(app: &mut Application<M>) {
    app.register_game(Stopwatch);
    app.register_game(TestEvents);
}

#[cfg(test)]
pub(crate) mod testing {
    use arcade_engine::coords::SurfaceSize;
    use arcade_engine::surface::{HeadlessSurfaceFactory, SurfaceFactory};
    use arcade_engine::time::StatsSeed;
    use arcade_engine::{Engine, EngineConfig};

    /// Engine on a 1000x500 headless surface.
    pub fn engine() -> Engine {
        engine_on(&mut HeadlessSurfaceFactory)
    }

    /// Engine on a 1000x500 surface from `surfaces`.
    pub fn engine_on(surfaces: &mut dyn SurfaceFactory) -> Engine {
        let mut engine = Engine::new();
        engine
            .set_up(
                EngineConfig {
                    container: SurfaceSize::new(1000, 500),
                    aspect_ratio: None,
                    context_revision: "junkrat".into(),
                    seed: StatsSeed::default(),
                },
                surfaces,
            )
            .unwrap();
        engine
    }
}
