use clap::Parser;

/// Print the weekly menu of the AGRICAS RIA restaurant.
#[derive(Debug, Parser)]
#[command(name = "ria-menu", version, about)]
pub struct Args {
    /// Number of extra days to display after today
    #[arg(short, long, default_value_t = 0)]
    pub days: u32,
}
