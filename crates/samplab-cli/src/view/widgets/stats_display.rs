use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize as _},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use samplab_engine::{EngineSnapshot, Statistic};

/// Numeric readout under the simulation canvas.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    snapshot: &'a EngineSnapshot<'a>,
    sample_size: usize,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(snapshot: &'a EngineSnapshot<'a>) -> Self {
        Self {
            snapshot,
            sample_size: 0,
        }
    }

    #[must_use]
    pub fn sample_size(self, sample_size: usize) -> Self {
        Self {
            sample_size,
            ..self
        }
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;
        let label = Style::default().fg(Color::DarkGray);

        let mut scenario = vec![
            Span::styled("statistic ", label),
            Span::raw(snapshot.statistic.to_string()).bold(),
            Span::styled("  n ", label),
            Span::raw(self.sample_size.to_string()),
            Span::styled("  seed ", label),
            Span::raw(snapshot.seed.0.to_string()),
            Span::styled("  speed ", label),
            Span::raw(snapshot.speed.to_string()),
        ];
        if snapshot.statistic == Statistic::Proportion {
            scenario.push(Span::styled("  threshold ", label));
            scenario.push(Span::raw(format!("{:.2}", snapshot.threshold)));
        }

        let population = match &snapshot.population_summary {
            Some(summary) => Line::from(vec![
                Span::styled("population   ", label),
                Span::raw(format!(
                    "mean {:.4}  sd {:.4}  median {:.4}",
                    summary.mean, summary.std_dev, summary.median
                )),
            ]),
            None => Line::from(vec![
                Span::styled("population   ", label),
                Span::raw("empty"),
            ]),
        };

        let distribution = match snapshot.distribution_summary {
            Some((mean, spread)) => Line::from(vec![
                Span::styled("distribution ", label),
                Span::raw(format!(
                    "mean {mean:.4}  spread {spread:.4}  observations {}",
                    snapshot.observations
                )),
            ]),
            None => Line::from(vec![
                Span::styled("distribution ", label),
                Span::raw("no observations"),
            ]),
        };

        Paragraph::new(vec![Line::from(scenario), population, distribution]).render(area, buf);
    }
}
