//! CLI tool to strip source files and turn their vocabulary into a word cloud.

use std::process::ExitCode;

use clap::Parser;
use domaincloud::cli::{self, Args, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::from(Args::parse());

    match cli::run(&config) {
        Ok(summary) if summary.success() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::warn!("{} input(s) could not be processed", summary.failed_inputs);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
