use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use samplab_engine::{EngineConfig, Simulation};

use crate::{
    tui::{App, RenderMode, Tui},
    view::widgets::{SimulationDisplay, StatsDisplay},
};

const TICK_RATE: f64 = 60.0;
/// Turbo batch size for the `b` key.
const BATCH_SAMPLES: usize = 100;
const THRESHOLD_STEP: f64 = 0.05;
const WEIGHT_STEP: i32 = 25;

#[derive(Debug)]
pub struct PlayApp {
    sim: Simulation,
    sample_size: usize,
    cursor: usize,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(config: EngineConfig, sample_size: usize, fast: bool) -> Self {
        let mut sim = Simulation::new(config);
        if fast {
            sim.set_speed(sim.config().speed.toggled());
        }
        let cursor = sim.population().bins() / 2;
        Self {
            sim,
            sample_size,
            cursor,
            is_exiting: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.is_exiting = true,
            KeyCode::Char('d' | ' ') => self.sim.draw_sample(self.sample_size),
            KeyCode::Char('g') => self.sim.gather(),
            KeyCode::Char('b') => self.sim.repeat(self.sample_size, BATCH_SAMPLES),
            KeyCode::Char('s') => {
                let next = self.sim.config().statistic.next();
                self.sim.set_statistic(next);
            }
            KeyCode::Char('o') => {
                let next = self.sim.config().generator.next();
                self.sim.set_generator(next);
            }
            KeyCode::Char('f') => {
                let toggled = self.sim.config().speed.toggled();
                self.sim.set_speed(toggled);
            }
            KeyCode::Char('c') => self.sim.clear_tray(),
            KeyCode::Char('x') => self.sim.reset(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.sim.population().bins() - 1);
            }
            KeyCode::Up => self.sim.modify_population(self.cursor, WEIGHT_STEP),
            KeyCode::Down => self.sim.modify_population(self.cursor, -WEIGHT_STEP),
            KeyCode::Char('[') => self.sample_size = self.sample_size.saturating_sub(1).max(2),
            KeyCode::Char(']') => self.sample_size = (self.sample_size + 1).min(1000),
            KeyCode::Char(',') => {
                let threshold = (self.sim.config().threshold - THRESHOLD_STEP).max(0.0);
                self.sim.set_threshold(threshold);
            }
            KeyCode::Char('.') => {
                let threshold = (self.sim.config().threshold + THRESHOLD_STEP).min(1.0);
                self.sim.set_threshold(threshold);
            }
            _ => {}
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
        tui.set_render_mode(RenderMode::OnDirty);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(event) = event.as_key_event() {
            self.handle_key(event.code);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let snapshot = self.sim.snapshot();
        let help_text = Text::from(
            "d (Draw) | g (Gather) | b (Batch x100) | s (Statistic) | o (Shape) | \
             ← → ↑ ↓ (Edit Population) | [ ] (Sample Size) | , . (Threshold) | \
             f (Speed) | c (Clear) | x (Reset) | q (Quit)",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();

        let [main_area, stats_area, help_area] = Layout::vertical([
            Constraint::Min(12),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas::<3>(frame.area());

        let display = SimulationDisplay::new(&snapshot).cursor(self.cursor);
        frame.render_widget(display, main_area);
        frame.render_widget(
            StatsDisplay::new(&snapshot).sample_size(self.sample_size),
            stats_area,
        );
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, tui: &mut Tui, dt: Duration) {
        self.sim.tick(dt);
        if self.sim.take_dirty() {
            tui.request_render();
        }
    }
}
