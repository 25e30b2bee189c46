// src/main.rs
use std::process::ExitCode;

use announcement_id::{app, cli::Args, config::Config, logging, presentation};
use clap::Parser;

fn main() -> ExitCode {
    logging::init();
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::try_from(args)?;
    let report = app::run(&config)?;
    println!("{}", presentation::render(&report, config.format)?);
    Ok(())
}
