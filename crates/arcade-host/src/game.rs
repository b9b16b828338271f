//! Game contract and the type-erased adapter the host stores.
//!
//! Games are written against the typed [`Game`] trait, which threads the
//! game's own state by value through every callback. The registry only sees
//! [`ErasedGame`], whose state is an opaque `Box<dyn Any>`.

use std::any::Any;
use std::fmt;

use anyhow::anyhow;

use arcade_engine::context::{FrameCtx, RedrawCtx};

/// Static description of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub name: String,
    pub description: String,
    /// Width / height the game is laid out for. `None` fills the host container.
    pub aspect_ratio: Option<f64>,
    /// Capabilities the engine must advertise, e.g. `shape:text`.
    pub feature_tags: Vec<String>,
    /// Context protocol the game is written against, e.g. `junkrat`.
    pub context_revision: String,
}

impl GameInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        context_revision: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aspect_ratio: None,
            feature_tags: Vec::new(),
            context_revision: context_revision.into(),
        }
    }

    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_feature_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// A game module.
///
/// `create` builds the initial state, `redraw` rebuilds the whole visual state
/// from it, and `on_frame` advances it by one tick.
pub trait Game {
    type Data: 'static;

    fn info(&self) -> GameInfo;

    fn create(&self) -> Self::Data;

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &Self::Data) -> anyhow::Result<()>;

    fn on_frame(&self, ctx: &mut FrameCtx<'_>, data: Self::Data) -> anyhow::Result<Self::Data>;
}

/// Opaque game state owned by a session.
pub type GameData = Box<dyn Any>;

/// Object-safe view of a [`Game`].
pub trait ErasedGame {
    fn info(&self) -> &GameInfo;

    fn create(&self) -> GameData;

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &GameData) -> anyhow::Result<()>;

    /// Advances `data` in place.
    ///
    /// On error `data` no longer holds the game's state and the session has
    /// to be ended.
    fn on_frame(&self, ctx: &mut FrameCtx<'_>, data: &mut GameData) -> anyhow::Result<()>;
}

/// Adapter from a typed [`Game`] to [`ErasedGame`].
pub struct GameAdapter<G: Game> {
    game: G,
    info: GameInfo,
}

impl<G: Game> GameAdapter<G> {
    pub fn new(game: G) -> Self {
        let info = game.info();
        Self { game, info }
    }

    #[inline]
    pub fn inner(&self) -> &G {
        &self.game
    }
}

impl<G: Game> fmt::Debug for GameAdapter<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameAdapter").field("info", &self.info).finish_non_exhaustive()
    }
}

impl<G: Game> ErasedGame for GameAdapter<G> {
    fn info(&self) -> &GameInfo {
        &self.info
    }

    fn create(&self) -> GameData {
        Box::new(self.game.create())
    }

    fn redraw(&self, ctx: &mut RedrawCtx<'_>, data: &GameData) -> anyhow::Result<()> {
        let data = data
            .downcast_ref::<G::Data>()
            .ok_or_else(|| foreign_data(&self.info))?;
        self.game.redraw(ctx, data)
    }

    fn on_frame(&self, ctx: &mut FrameCtx<'_>, data: &mut GameData) -> anyhow::Result<()> {
        let current = std::mem::replace(data, Box::new(()));
        let current = current
            .downcast::<G::Data>()
            .map_err(|_| foreign_data(&self.info))?;
        let next = self.game.on_frame(ctx, *current)?;
        *data = Box::new(next);
        Ok(())
    }
}

fn foreign_data(info: &GameInfo) -> anyhow::Error {
    anyhow!("session data does not belong to game {:?}", info.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use arcade_engine::surface::HeadlessSurfaceFactory;
    use arcade_engine::coords::SurfaceSize;
    use arcade_engine::time::StatsSeed;
    use arcade_engine::{Engine, EngineConfig};

    struct Counter;

    impl Game for Counter {
        type Data = u32;

        fn info(&self) -> GameInfo {
            GameInfo::new("Counter", "counts frames", "junkrat").with_feature_tags(["shape:text"])
        }

        fn create(&self) -> u32 {
            7
        }

        fn redraw(&self, _ctx: &mut RedrawCtx<'_>, _data: &u32) -> anyhow::Result<()> {
            Ok(())
        }

        fn on_frame(&self, _ctx: &mut FrameCtx<'_>, data: u32) -> anyhow::Result<u32> {
            Ok(data + 1)
        }
    }

    fn engine() -> Engine {
        let mut engine = Engine::new();
        engine
            .set_up(
                EngineConfig {
                    container: SurfaceSize::new(100, 100),
                    aspect_ratio: None,
                    context_revision: "junkrat".into(),
                    seed: StatsSeed::default(),
                },
                &mut HeadlessSurfaceFactory,
            )
            .unwrap();
        engine
    }

    #[test]
    fn adapter_caches_info() {
        let game = GameAdapter::new(Counter);
        assert_eq!(game.info().name, "Counter");
        assert_eq!(game.info().feature_tags, vec!["shape:text".to_string()]);
        assert_eq!(game.info().aspect_ratio, None);
    }

    #[test]
    fn on_frame_threads_state_by_value() {
        let game = GameAdapter::new(Counter);
        let mut engine = engine();
        let mut data = game.create();

        game.on_frame(&mut engine.frame_context(0.0).unwrap(), &mut data).unwrap();
        game.on_frame(&mut engine.frame_context(16.0).unwrap(), &mut data).unwrap();

        assert_eq!(data.downcast_ref::<u32>(), Some(&9));
    }

    #[test]
    fn foreign_data_is_rejected() {
        let game = GameAdapter::new(Counter);
        let mut engine = engine();
        let mut data: GameData = Box::new("not a counter");

        let err = game.on_frame(&mut engine.frame_context(0.0).unwrap(), &mut data).unwrap_err();
        assert!(err.to_string().contains("Counter"));
        assert!(game.redraw(&mut engine.redraw_context(0.0).unwrap(), &data).is_err());
    }
}
