use crate::estimate::TripType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mquote")]
#[command(version, about = "Moving cost estimates from trip parameters")]
pub struct Cli {
    /// Read trip parameters JSON from a file instead of stdin
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use a config file other than ~/.config/movequote/config.toml
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the request's trip type (one-way, round-trip)
    #[arg(short = 't', long = "trip-type", value_name = "TYPE")]
    pub trip_type: Option<TripType>,

    /// Print full-precision amounts instead of rounding to cents
    #[arg(long = "raw")]
    pub raw: bool,

    /// Print the breakdown on a single line
    #[arg(long = "compact")]
    pub compact: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
