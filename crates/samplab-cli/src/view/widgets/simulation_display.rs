use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    widgets::Widget,
};
use samplab_engine::EngineSnapshot;

const POPULATION_COLOR: Color = Color::Blue;
const CURSOR_COLOR: Color = Color::LightBlue;
const TRAY_COLOR: Color = Color::Green;
const DISTRIBUTION_COLOR: Color = Color::Magenta;
const PARTICLE_COLOR: Color = Color::Yellow;
const GATHER_COLOR: Color = Color::Cyan;

/// The three stacked tray sections plus everything in flight.
///
/// Maps the engine's pixel-space geometry onto the terminal area: the three
/// sections split the area vertically, bars grow upward from each section's
/// bottom row, and particle positions scale from pixel coordinates to cells.
#[derive(Debug)]
pub struct SimulationDisplay<'a> {
    snapshot: &'a EngineSnapshot<'a>,
    cursor: Option<usize>,
}

impl<'a> SimulationDisplay<'a> {
    pub fn new(snapshot: &'a EngineSnapshot<'a>) -> Self {
        Self {
            snapshot,
            cursor: None,
        }
    }

    /// Highlights the population bin under the edit cursor.
    #[must_use]
    pub fn cursor(self, bin: usize) -> Self {
        Self {
            cursor: Some(bin),
            ..self
        }
    }
}

impl Widget for SimulationDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SimulationDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;
        let [population_area, tray_area, distribution_area] = Layout::vertical([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas::<3>(area);

        render_bars(
            population_area,
            buf,
            snapshot.population,
            snapshot.max_population_weight,
            POPULATION_COLOR,
            self.cursor,
        );
        // Tray stacks are absolute: one stack unit per landed value, scaled
        // the same way the pixel geometry scales them.
        let tray_capacity = stack_capacity(&snapshot.geometry);
        render_bars(tray_area, buf, snapshot.tray, tray_capacity, TRAY_COLOR, None);
        let distribution_peak = snapshot.distribution.iter().copied().max().unwrap_or(0);
        render_bars(
            distribution_area,
            buf,
            snapshot.distribution,
            distribution_peak.max(stack_capacity(&snapshot.geometry)),
            DISTRIBUTION_COLOR,
            None,
        );

        for particle in snapshot.particles {
            render_point(area, buf, snapshot, particle.x, particle.y, PARTICLE_COLOR);
        }
        for &(x, y) in &snapshot.gather_positions {
            render_point(area, buf, snapshot, x, y, GATHER_COLOR);
        }
        if let Some(particle) = snapshot.settling {
            render_point(area, buf, snapshot, particle.x, particle.y, PARTICLE_COLOR);
        }
    }
}

/// Values a section can stack before bars reach its top.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stack_capacity(geometry: &samplab_engine::Geometry) -> u32 {
    (geometry.section_height / geometry.stack_unit) as u32
}

/// Draws one histogram section: bars grow upward from the bottom row.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_bars(
    area: Rect,
    buf: &mut Buffer,
    values: &[u32],
    max: u32,
    color: Color,
    cursor: Option<usize>,
) {
    if area.is_empty() || values.is_empty() {
        return;
    }
    let bins = values.len();
    for (bin, &value) in values.iter().enumerate() {
        let x0 = area.x + (bin * usize::from(area.width) / bins) as u16;
        let x1 = area.x + ((bin + 1) * usize::from(area.width) / bins) as u16;
        let x1 = x1.max(x0 + 1).min(area.right());
        let rows = if max == 0 {
            0
        } else {
            (f64::from(value) / f64::from(max) * f64::from(area.height)).round() as u16
        };
        let rows = rows.min(area.height);
        let fg = if cursor == Some(bin) { CURSOR_COLOR } else { color };
        for y in area.bottom() - rows..area.bottom() {
            for x in x0..x1 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("█").set_fg(fg);
                }
            }
        }
        // The cursor stays visible even over an empty bin.
        if cursor == Some(bin) && rows == 0 {
            for x in x0..x1 {
                if let Some(cell) = buf.cell_mut((x, area.bottom() - 1)) {
                    cell.set_symbol("▁").set_fg(CURSOR_COLOR);
                }
            }
        }
    }
}

/// Maps one pixel-space position onto the full canvas area.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_point(area: Rect, buf: &mut Buffer, snapshot: &EngineSnapshot<'_>, x: f64, y: f64, color: Color) {
    let geometry = snapshot.geometry;
    if geometry.width <= 0.0 || geometry.height() <= 0.0 {
        return;
    }
    let col = ((x / geometry.width) * f64::from(area.width)) as u16;
    let row = ((y / geometry.height()) * f64::from(area.height)) as u16;
    let col = area.x + col.min(area.width.saturating_sub(1));
    let row = area.y + row.min(area.height.saturating_sub(1));
    if let Some(cell) = buf.cell_mut((col, row)) {
        cell.set_symbol("●").set_fg(color);
    }
}
