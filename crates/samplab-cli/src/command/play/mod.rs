use crate::{
    command::{ScenarioArg, play::app::PlayApp},
    tui::Tui,
};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    scenario: ScenarioArg,
    /// Start with doubled animation speed
    #[clap(long, default_value_t = false)]
    fast: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut app = PlayApp::new(arg.scenario.engine_config(), arg.scenario.sample_size(), arg.fast);
    Tui::default().run(&mut app)
}
