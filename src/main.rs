use anyhow::Context;
use clap::Parser;
use cycle_dashboard::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("cycle-dashboard failed")
}
