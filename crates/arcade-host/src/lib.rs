//! Arcade host: game registry, session lifecycle and menu wiring on top of
//! `arcade-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use arcade_engine::surface::HeadlessSurfaceFactory;
//! use arcade_host::prelude::*;
//!
//! let mut app = Application::new(MyMenu::default(), HeadlessSurfaceFactory);
//! let clock = app.register_game(Clock);
//!
//! app.on_ready(SurfaceSize::new(1280, 720));
//! app.select(clock)?;
//! // Then, once per host frame:
//! let next = app.on_frame(timestamp_ms)?;
//! ```

pub mod application;
pub mod error;
pub mod game;
pub mod menu;
pub mod registry;
pub mod session;

pub use application::{Application, DebugSettings};
pub use error::AppError;
pub use game::{ErasedGame, Game, GameAdapter, GameData, GameInfo};
pub use menu::Menu;
pub use registry::{CapabilityPolicy, GameEntry, GameKey, GameRegistry};
pub use session::SessionState;

/// Everything a game or a host needs, in one import.
pub mod prelude {
    pub use crate::{
        AppError, Application, CapabilityPolicy, Game, GameEntry, GameInfo, GameKey, Menu,
        SessionState,
    };

    pub use arcade_engine::context::{FrameCtx, RedrawCtx, SystemSnapshot};
    pub use arcade_engine::coords::SurfaceSize;
    pub use arcade_engine::input::{CapturedEvent, EventKind};
    pub use arcade_engine::scene::{AttrValue, Attrs};
}
