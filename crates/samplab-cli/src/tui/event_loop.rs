use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// Events delivered to TUI applications.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Logic update timing, carrying the elapsed time since the last tick.
    Tick(Duration),
    /// Screen render timing.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Render at fixed intervals.
    Interval(Duration),
    /// Render only after the application marks itself dirty.
    ///
    /// Ticks do not dirty the frame by themselves; the application calls
    /// [`crate::tui::Tui::request_render`] when a tick actually changed
    /// something visible. An idle simulation therefore repaints nothing.
    #[default]
    OnDirty,
}

/// Tick/render scheduling for the TUI event loop.
///
/// Returns the next due event from `next()`, blocking on crossterm events in
/// between. Without a tick interval only renders and crossterm events are
/// generated.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: now,
            // Initial render is required on startup.
            dirty: true,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Marks the current frame dirty so the next loop turn renders.
    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick or render is due or a crossterm event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval {
                let since_tick = now.duration_since(self.last_tick);
                if since_tick >= tick_interval {
                    self.last_tick = now;
                    return Ok(TuiEvent::Tick(since_tick));
                }
            }

            let do_render = match self.render_mode {
                RenderMode::Interval(interval) => now.duration_since(self.last_render) >= interval,
                RenderMode::OnDirty => self.dirty,
            };
            if do_render {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            // Input changes state, so the frame needs repainting.
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::Interval(interval) => Some(self.last_render + interval),
            RenderMode::OnDirty => self.dirty.then_some(now),
        };
        let next_timeout_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}
