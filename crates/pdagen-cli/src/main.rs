use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod config;
mod output;

fn main() -> ExitCode {
    let cli = args::Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: args::Cli) -> Result<()> {
    let cfg = config::RunConfig::from_cli(&cli)?;
    output::init(&cfg)?;

    cmd::dispatch(cli, &cfg)
}
