pub mod cli;
pub mod config;
pub mod estimate;
pub mod utils;
