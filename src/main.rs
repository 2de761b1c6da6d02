// src/main.rs
use clap::Parser;
use jversion::args::Args;
use jversion::config::Config;
use jversion::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.log_level);

    let stdout = std::io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
