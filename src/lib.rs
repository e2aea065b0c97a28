#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use pretty_env_logger as _; // initialised by the binary

pub mod cli;
pub mod config;
mod error;
pub mod fetch;
pub mod filter;
pub mod parse;
pub mod render;

use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::{config::Config, filter::DayWindow, parse::WeekMenu, render::Printer};

pub use error::{Error, Result};

/// Loads the menu page, keeps the days inside the window starting at `today`
/// and prints them to `out`.
pub async fn run<W: Write>(
    config: &Config,
    days: u32,
    today: NaiveDate,
    out: &mut W,
) -> Result<WeekMenu> {
    let page = fetch::load(config).await?;
    let menu = WeekMenu::from_html(&page, today.year());
    log::debug!("Parsed {} menu day(s)", menu.len());
    let menu = filter::filter(&menu, DayWindow::new(today, days));
    Printer::new(&config.style).print(&menu, today, out)?;
    Ok(menu)
}
