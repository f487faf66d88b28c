use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Trait for TUI applications driven by [`Tui::run`].
pub trait App {
    /// Called once before the event loop starts. Use this to configure the
    /// tick rate and render mode.
    fn init(&mut self, tui: &mut Tui);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    /// Draws the screen (called on each render event).
    fn draw(&self, frame: &mut Frame);

    /// Advances application logic by the wall-clock time since the previous
    /// tick. Animations integrate over `dt`, so a late tick covers the full
    /// elapsed interval instead of slowing the simulation down.
    fn update(&mut self, tui: &mut Tui, dt: Duration);
}
