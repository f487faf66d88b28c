pub use self::{simulation_display::SimulationDisplay, stats_display::StatsDisplay};

mod simulation_display;
mod stats_display;
