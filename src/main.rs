use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use count_vowels::{app, cli::Args, config::Config};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    init_logger(&config);

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(config: &Config) {
    let default_level = config.log_level.to_string();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn try_main(config: &Config) -> Result<()> {
    app::run(config)?;
    Ok(())
}
