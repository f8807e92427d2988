use super::catalog::CatalogEntry;
use super::types::Config;
use crate::estimate::types::{DEFAULT_MILES_PER_GALLON, DEFAULT_TOLL_UNIT_COST};
use crate::estimate::RateConfiguration;

/// House rates. Flight tickets have no default: they are quoted per lead.
pub const DEFAULT_RATES: RateConfiguration = RateConfiguration {
    one_way_driver_hourly: Some(40.0),
    round_trip_driver_hourly: Some(50.0),
    fuel_price_per_gallon: Some(4.0),
    fuel_efficiency_miles_per_gallon: Some(DEFAULT_MILES_PER_GALLON),
    toll_unit_cost: Some(DEFAULT_TOLL_UNIT_COST),
    labor_daily_rate: Some(300.0),
    labor_hourly_rate: Some(40.0),
    hotel_nightly_rate: Some(120.0),
    per_diem_rate: Some(50.0),
    truck_daily_rate: Some(300.0),
    truck_mileage_rate: Some(0.30),
    shuttle_daily_rate: Some(250.0),
    shuttle_mileage_rate: Some(0.50),
    flight_ticket_rate: None,
};

pub const DEFAULT_PACKING_CATALOG: &[(&str, f64)] = &[
    ("Small Box", 2.50),
    ("Medium Box", 3.50),
    ("Large Box", 4.50),
    ("Wardrobe Box", 15.00),
    ("Dish Pack", 8.00),
    ("Packing Paper", 30.00),
    ("Bubble Wrap", 25.00),
    ("Packing Tape", 5.00),
    ("Mattress Bag", 10.00),
    ("Stretch Wrap", 20.00),
];

impl Default for Config {
    fn default() -> Self {
        Config {
            rates: DEFAULT_RATES,
            packing_catalog: DEFAULT_PACKING_CATALOG
                .iter()
                .map(|(name, price)| CatalogEntry::new(name, *price))
                .collect(),
        }
    }
}
