use log::info;

use arcade_host::{GameEntry, Menu};

/// Menu that renders to the log.
#[derive(Debug, Default)]
pub struct LogMenu {
    attached: bool,
    modal: bool,
    entries: Vec<GameEntry>,
}

impl LogMenu {
    fn print_list(&self) {
        for entry in &self.entries {
            let mut flags = Vec::new();
            if entry.running {
                flags.push("running");
            }
            if entry.will_restart {
                flags.push("restarts");
            }
            if !entry.supported {
                flags.push("unsupported");
            }

            info!(
                "  [{}] {} - {}{}",
                entry.key.index() + 1,
                entry.name,
                entry.description,
                if flags.is_empty() { String::new() } else { format!(" ({})", flags.join(", ")) }
            );
        }
    }
}

impl Menu for LogMenu {
    fn create_element(&mut self, games: &[GameEntry]) {
        self.entries = games.to_vec();
    }

    fn attach_element(&mut self) {
        self.attached = true;
    }

    fn show_modal(&mut self) {
        if !self.attached || self.modal {
            return;
        }
        self.modal = true;
        info!("select a game:");
        self.print_list();
    }

    fn hide_modal(&mut self) {
        self.modal = false;
    }

    fn set_game_name(&mut self, name: &str) {
        info!("now playing: {name}");
    }

    fn set_fps(&mut self, fps: u32) {
        info!("fps: {fps}");
    }

    fn update_game_list(&mut self, games: &[GameEntry]) {
        self.entries = games.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_host::GameKey;

    fn entry(index: usize) -> GameEntry {
        GameEntry {
            key: GameKey::new(index),
            name: format!("game {index}"),
            description: String::new(),
            running: false,
            supported: true,
            will_restart: false,
        }
    }

    #[test]
    fn modal_needs_attachment() {
        let mut menu = LogMenu::default();
        menu.create_element(&[entry(0)]);
        menu.show_modal();
        assert!(!menu.modal);

        menu.attach_element();
        menu.show_modal();
        assert!(menu.modal);
        menu.hide_modal();
        assert!(!menu.modal);
    }

    #[test]
    fn update_replaces_entries() {
        let mut menu = LogMenu::default();
        menu.create_element(&[entry(0)]);
        menu.update_game_list(&[entry(0), entry(1)]);
        assert_eq!(menu.entries.len(), 2);
    }
}
