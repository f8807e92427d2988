use super::labor::Crew;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckRates {
    pub daily_rate: f64,
    pub mileage_rate: f64,
}

/// Resolved shuttle service block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shuttle {
    pub days: u32,
    pub daily_rate: f64,
    pub miles: f64,
    pub mileage_rate: f64,
}

impl Shuttle {
    pub fn cost(&self) -> f64 {
        self.days as f64 * self.daily_rate + self.miles * self.mileage_rate
    }
}

/// Rental days: driving days plus every crew's and the shuttle's day-equivalents.
/// Saturates at `u32::MAX`; resolved trips stay far below it.
pub fn truck_days(
    driving_days: u32,
    loading: &Crew,
    unloading: Option<&Crew>,
    shuttle: Option<&Shuttle>,
) -> u32 {
    driving_days
        .saturating_add(loading.day_equivalent())
        .saturating_add(unloading.map(Crew::day_equivalent).unwrap_or(0))
        .saturating_add(shuttle.map(|s| s.days).unwrap_or(0))
}

pub fn truck_cost(days: u32, total_miles: f64, rates: &TruckRates) -> f64 {
    days as f64 * rates.daily_rate + total_miles * rates.mileage_rate
}

pub fn shuttle_cost(shuttle: Option<&Shuttle>) -> f64 {
    shuttle.map(Shuttle::cost).unwrap_or(0.0)
}
