use std::time::Duration;

use crate::tui::{
    App,
    event_loop::{EventLoop, RenderMode, TuiEvent},
};

/// TUI application runtime.
///
/// Owns the event loop and executes applications implementing [`App`].
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Sets the tick rate (Hz, ticks per second).
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.set_tick_interval(Some(Duration::from_secs_f64(1.0 / rate)));
    }

    /// Sets the tick interval. Pass `None` to disable tick events.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Sets the render mode.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Requests a repaint on the next loop turn. In `OnDirty` render mode
    /// this is the only way application state changes reach the screen.
    pub fn request_render(&mut self) {
        self.events.mark_dirty();
    }

    /// Runs the application until [`App::should_exit`] returns true.
    ///
    /// Each loop turn dispatches one event: ticks go to [`App::update`] with
    /// the elapsed time, renders to [`App::draw`], and terminal input to
    /// [`App::handle_event`].
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick(dt) => {
                        app.update(&mut self, dt);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
