#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use chrono::Local;
use clap::Parser;
use ria_menu::{cli::Args, config::Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    let config = Config::default().with_color(io::stdout().is_terminal());
    let today = Local::now().date_naive();
    log::debug!("Showing {} extra day(s) after {today}", args.days);

    match ria_menu::run(&config, args.days, today, &mut io::stdout().lock()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
