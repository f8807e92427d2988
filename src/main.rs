use movequote::cli::Cli;
use movequote::config::{Config, ConfigLoader};
use movequote::debug_println;
use movequote::estimate::{estimate, TripParameters};
use std::fs;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init(cli.config.as_deref())?;
        return Ok(());
    }

    let config = ConfigLoader::load(cli.config.as_deref())?;

    if cli.print {
        config.print()?;
        return Ok(());
    }

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Read trip parameters from --input or stdin
    let mut params: TripParameters = match &cli.input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => {
            let stdin = io::stdin();
            serde_json::from_reader(stdin.lock())?
        }
    };

    if let Some(trip_type) = cli.trip_type {
        debug_println!("Trip type overridden: {} -> {}", params.trip_type, trip_type);
        params.trip_type = trip_type;
    }

    let params = config.apply_defaults(params);

    let breakdown = match estimate(&params) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    debug_println!(
        "Adjusted drive hours: {:.2}, driving days: {}, truck days: {}, hotel nights: {}",
        breakdown.adjusted_drive_hours,
        breakdown.driving_days,
        breakdown.truck_days,
        breakdown.hotel_nights
    );

    let output = if cli.raw {
        breakdown
    } else {
        breakdown.rounded_to_cents()
    };

    let json = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", json);

    Ok(())
}
