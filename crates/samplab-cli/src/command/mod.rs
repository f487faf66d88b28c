use clap::{Parser, Subcommand};
use samplab_engine::{
    EngineConfig, GeneratorShape, Seed, Statistic,
};

use self::{play::PlayArg, simulate::SimulateArg};

mod play;
mod simulate;

/// Sample size bounds; a statistic over fewer than 2 values is degenerate
/// and the animation becomes unreadable past 1000 particles.
const SAMPLE_SIZE_RANGE: (usize, usize) = (2, 1000);

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Interactive sampling-distribution simulator
    Play(#[clap(flatten)] PlayArg),
    /// Headless batch simulation printing summary statistics
    Simulate(#[clap(flatten)] SimulateArg),
}

/// Scenario parameters shared by both modes.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScenarioArg {
    /// Seed for the deterministic sampling stream
    #[clap(long, default_value_t = 1)]
    seed: u32,
    /// Population generator shape (normal, uniform, bimodal, skewed)
    #[clap(long, default_value_t = GeneratorShape::Normal)]
    shape: GeneratorShape,
    /// Statistic to accumulate (mean, median, std-dev, proportion)
    #[clap(long, default_value_t = Statistic::Mean)]
    statistic: Statistic,
    /// Number of values drawn per sample
    #[clap(long, short = 'n', default_value_t = 10)]
    sample_size: usize,
    /// Threshold for the proportion statistic
    #[clap(long, default_value_t = 0.5)]
    threshold: f64,
}

impl Default for ScenarioArg {
    fn default() -> Self {
        Self {
            seed: 1,
            shape: GeneratorShape::Normal,
            statistic: Statistic::Mean,
            sample_size: 10,
            threshold: 0.5,
        }
    }
}

impl ScenarioArg {
    pub(crate) fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            seed: Seed(self.seed),
            generator: self.shape,
            statistic: self.statistic,
            threshold: self.threshold,
            ..EngineConfig::default()
        }
    }

    pub(crate) fn sample_size(&self) -> usize {
        let (min, max) = SAMPLE_SIZE_RANGE;
        self.sample_size.clamp(min, max)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
