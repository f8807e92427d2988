use super::error::Result;
use super::lodging::{derive_hotel_nights, lodging_cost, LodgingCost};
use super::packing::packing_cost;
use super::resolve::{resolve, ResolvedTrip};
use super::travel::{driver_pay, flight_cost, fuel_cost, toll_cost};
use super::trip::TripMetrics;
use super::truck::{shuttle_cost, truck_cost, truck_days};
use super::types::{CostBreakdown, TripParameters};

/// Estimate the cost of one move.
///
/// Fails with [`super::EstimateError`] before computing anything when an input is
/// invalid or a rate needed by an active category is missing.
pub fn estimate(params: &TripParameters) -> Result<CostBreakdown> {
    let trip = resolve(params)?;
    Ok(calculate_breakdown(&trip))
}

/// Compose every cost model over an already validated trip
pub fn calculate_breakdown(trip: &ResolvedTrip) -> CostBreakdown {
    let metrics = TripMetrics::from_gps_hours(trip.gps_drive_hours);

    let unloading = trip.unloading.as_ref();
    let shuttle = trip.shuttle.as_ref();
    let lodging = trip.lodging.as_ref();

    let truck_days = truck_days(metrics.driving_days, &trip.loading, unloading, shuttle);
    let hotel_nights = hotel_nights(trip, truck_days);

    let LodgingCost { hotel, per_diem } =
        lodging_cost(lodging, hotel_nights, metrics.driving_days, trip.trip_type);

    let mut breakdown = CostBreakdown {
        driver_pay: driver_pay(trip.drivers, metrics.adjusted_drive_hours, &trip.drive_rates),
        fuel_cost: fuel_cost(trip.total_miles, &trip.drive_rates),
        labor_cost: super::labor::labor_cost(&trip.loading, unloading),
        hotel_cost: hotel,
        per_diem_cost: per_diem,
        packing_cost: packing_cost(&trip.packing),
        truck_cost: truck_cost(truck_days, trip.total_miles, &trip.truck),
        shuttle_cost: shuttle_cost(shuttle),
        flight_cost: flight_cost(trip.trip_type, trip.flight.as_ref()),
        toll_cost: toll_cost(trip.trip_type, trip.toll_count, &trip.drive_rates),
        adjusted_drive_hours: metrics.adjusted_drive_hours,
        driving_days: metrics.driving_days,
        truck_days,
        hotel_nights,
        total: 0.0,
    };
    breakdown.total = breakdown.category_sum();
    breakdown
}

/// Entered nights win; otherwise nights follow the truck rental. Zero without a hotel.
fn hotel_nights(trip: &ResolvedTrip, truck_days: u32) -> u32 {
    match trip.lodging {
        Some(lodging) => lodging
            .nights
            .unwrap_or_else(|| derive_hotel_nights(truck_days)),
        None => 0,
    }
}
