use super::types::TripType;

/// Resolved per-trip driving rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveRates {
    pub driver_hourly: f64,
    pub fuel_price_per_gallon: f64,
    pub miles_per_gallon: f64,
    pub toll_unit_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub returning_people: u32,
    pub ticket_rate: f64,
}

pub fn driver_pay(drivers: u32, adjusted_drive_hours: f64, rates: &DriveRates) -> f64 {
    drivers as f64 * adjusted_drive_hours * rates.driver_hourly
}

pub fn fuel_cost(total_miles: f64, rates: &DriveRates) -> f64 {
    total_miles / rates.miles_per_gallon * rates.fuel_price_per_gallon
}

/// Return flights are billed on one-way moves only
pub fn flight_cost(trip_type: TripType, flight: Option<&Flight>) -> f64 {
    match (trip_type, flight) {
        (TripType::OneWay, Some(flight)) => flight.returning_people as f64 * flight.ticket_rate,
        _ => 0.0,
    }
}

/// Tolls are mirrored on the return leg of a round trip
pub fn toll_cost(trip_type: TripType, toll_count: u32, rates: &DriveRates) -> f64 {
    toll_count as f64 * rates.toll_unit_cost * trip_type.leg_multiplier()
}
