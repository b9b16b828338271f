//! Menu collaborator.
//!
//! The menu renders the game list, the FPS counter and the selection modal.
//! The application drives it through this trait and never inspects it; a
//! menu asks for changes by calling back into `Application::select` and
//! `Application::pause` from its host.

use crate::registry::GameEntry;

pub trait Menu {
    /// Builds the menu with the initial game list.
    fn create_element(&mut self, games: &[GameEntry]);

    /// Inserts the built menu into the host.
    fn attach_element(&mut self);

    fn show_modal(&mut self);

    fn hide_modal(&mut self);

    /// Shows the name of the game that owns the session.
    fn set_game_name(&mut self, name: &str);

    fn set_fps(&mut self, fps: u32);

    /// Replaces the listed games.
    fn update_game_list(&mut self, games: &[GameEntry]);
}
