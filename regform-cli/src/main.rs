//! `regform`: preview and check registration form configurations.

mod cli;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.debug)?;

    cli::run(cli)
}
