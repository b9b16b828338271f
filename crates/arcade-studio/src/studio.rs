use anyhow::Result;

use arcade_engine::core::{App, FrameRequest, HostSignal};
use arcade_engine::input::Key;
use arcade_host::{Application, GameKey};

use crate::menu::LogMenu;
use crate::surface::Pointer;

/// Keyboard front end for the application.
///
/// Digits pick a game by its menu position, Escape pauses and Space clicks
/// the game's button. Every other signal goes straight to the application.
pub struct Studio {
    app: Application<LogMenu>,
    pointer: Pointer,
}

impl Studio {
    pub fn new(app: Application<LogMenu>, pointer: Pointer) -> Self {
        Self { app, pointer }
    }

    fn on_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Escape => {
                self.app.pause();
                return Ok(());
            }
            Key::Space => {
                if !self.app.is_paused() {
                    self.pointer.click();
                }
                return Ok(());
            }
            _ => {}
        }

        let Some(digit) = key.digit().filter(|d| *d > 0) else {
            log::debug!("unbound key {key}");
            return Ok(());
        };
        let key = GameKey::new(usize::from(digit - 1));

        let Some(entry) = self.app.game_entries().into_iter().find(|e| e.key == key) else {
            log::warn!("no game at position {digit}");
            return Ok(());
        };
        if !entry.supported {
            log::warn!("{} needs capabilities this engine lacks", entry.name);
            return Ok(());
        }

        self.app.select(key)?;
        Ok(())
    }
}

impl App for Studio {
    fn on_signal(&mut self, signal: HostSignal) -> Result<FrameRequest> {
        match signal {
            HostSignal::Key(key) => {
                self.on_key(key)?;
                Ok(self.app.frame_request())
            }
            other => self.app.on_signal(other),
        }
    }

    fn on_frame(&mut self, timestamp_ms: f64) -> Result<FrameRequest> {
        Ok(self.app.on_frame(timestamp_ms)?)
    }
}
