mod app;
mod event_loop;
mod runner;

pub use self::{app::App, event_loop::RenderMode, runner::Tui};
