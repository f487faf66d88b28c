use samplab_engine::{Simulation, Statistic};
use serde::Serialize;

use crate::command::ScenarioArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    scenario: ScenarioArg,
    /// Number of samples to draw and accumulate
    #[clap(long, default_value_t = 1000)]
    samples: usize,
    /// Print the report as JSON instead of text
    #[clap(long, default_value_t = false)]
    json: bool,
}

/// Summary of one headless simulation run.
#[derive(Debug, Serialize)]
struct Report {
    seed: u32,
    shape: String,
    statistic: Statistic,
    sample_size: usize,
    samples: usize,
    observations: u64,
    population_mean: Option<f64>,
    population_std_dev: Option<f64>,
    distribution_mean: Option<f64>,
    distribution_spread: Option<f64>,
    histogram: Vec<u32>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let config = arg.scenario.engine_config();
    let mut sim = Simulation::new(config);
    sim.repeat(arg.scenario.sample_size(), arg.samples);

    let population = sim.population().summary(sim.config().threshold);
    let distribution = sim.distribution().mean_and_spread();
    let report = Report {
        seed: sim.config().seed.0,
        shape: sim.config().generator.to_string(),
        statistic: sim.config().statistic,
        sample_size: arg.scenario.sample_size(),
        samples: arg.samples,
        observations: sim.distribution().total(),
        population_mean: population.as_ref().map(|p| p.mean),
        population_std_dev: population.as_ref().map(|p| p.std_dev),
        distribution_mean: distribution.map(|(mean, _)| mean),
        distribution_spread: distribution.map(|(_, spread)| spread),
        histogram: sim.distribution().counts().counts().to_vec(),
    };

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

#[expect(clippy::cast_possible_truncation)]
fn print_text(report: &Report) {
    println!(
        "{} of n = {} over {} shape, seed {}",
        report.statistic, report.sample_size, report.shape, report.seed
    );
    println!("observations: {} / {}", report.observations, report.samples);
    if let (Some(mean), Some(std_dev)) = (report.population_mean, report.population_std_dev) {
        println!("population:   mean {mean:.4}  sd {std_dev:.4}");
    }
    if let (Some(mean), Some(spread)) = (report.distribution_mean, report.distribution_spread) {
        println!("distribution: mean {mean:.4}  spread {spread:.4}");
    }
    let peak = report.histogram.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return;
    }
    for (bin, &count) in report.histogram.iter().enumerate() {
        let width = (u64::from(count) * 50 / u64::from(peak)) as usize;
        println!("{bin:>3} | {:<50} {count}", "#".repeat(width));
    }
}
