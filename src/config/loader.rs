use super::types::Config;
use crate::debug_println;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from an explicit path, or the default location when none is given
    pub fn load(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Config::load(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        debug_println!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            debug_println!(
                "No config at {}, using built-in rates",
                config_path.display()
            );
            return Ok(Config::default());
        }

        ConfigLoader::load_from_path(config_path)
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to_path(Self::get_config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.config/movequote/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("movequote").join("config.toml")
        } else {
            PathBuf::from(".config/movequote/config.toml")
        }
    }

    /// Create the config file with default rates unless one already exists
    pub fn init(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        if !config_path.exists() {
            Config::default().save_to_path(&config_path)?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rates = &self.rates;
        let named_rates = [
            ("oneWayDriverHourly", rates.one_way_driver_hourly),
            ("roundTripDriverHourly", rates.round_trip_driver_hourly),
            ("fuelPricePerGallon", rates.fuel_price_per_gallon),
            (
                "fuelEfficiencyMilesPerGallon",
                rates.fuel_efficiency_miles_per_gallon,
            ),
            ("tollUnitCost", rates.toll_unit_cost),
            ("laborDailyRate", rates.labor_daily_rate),
            ("laborHourlyRate", rates.labor_hourly_rate),
            ("hotelNightlyRate", rates.hotel_nightly_rate),
            ("perDiemRate", rates.per_diem_rate),
            ("truckDailyRate", rates.truck_daily_rate),
            ("truckMileageRate", rates.truck_mileage_rate),
            ("shuttleDailyRate", rates.shuttle_daily_rate),
            ("shuttleMileageRate", rates.shuttle_mileage_rate),
            ("flightTicketRate", rates.flight_ticket_rate),
        ];

        for (name, value) in named_rates {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(format!("Rate {} must be a non-negative number", name).into());
                }
            }
        }

        if rates.fuel_efficiency_miles_per_gallon == Some(0.0) {
            return Err("Rate fuelEfficiencyMilesPerGallon must be greater than 0".into());
        }

        // Catalog names must be unique (case-insensitive) and prices valid
        let mut seen_names = HashSet::new();
        for entry in &self.packing_catalog {
            if entry.name.trim().is_empty() {
                return Err("Packing catalog entry with empty name".into());
            }
            if !seen_names.insert(entry.name.to_lowercase()) {
                return Err(format!("Duplicate packing catalog entry: {}", entry.name).into());
            }
            if !entry.unit_price.is_finite() || entry.unit_price < 0.0 {
                return Err(format!("Invalid price for packing supply: {}", entry.name).into());
            }
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
