//! CLI entry point for the profile picture generator

use clap::Parser;
use log::debug;
use pfpgen::io::cli::{Cli, Runner};

fn main() -> pfpgen::Result<()> {
    let cli = Cli::parse();
    let env = env_logger::Env::default().default_filter_or(cli.log_filter());
    env_logger::Builder::from_env(env).init();

    let summary = Runner::new(cli).run()?;
    debug!(
        "Generated {} image(s), saved {}",
        summary.generated,
        summary.saved.len()
    );
    Ok(())
}
