//! textsmith - command-line entry point

use anyhow::Result;
use clap::Parser;

use textsmith::cli::CliArgs;
use textsmith::runtime::run_cli;
use textsmith::EditorConfig;

fn main() -> Result<()> {
    textsmith::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();

    run_cli(args, config)
}
