use super::types::TripType;

/// Resolved hotel block. `nights` is None when it should be derived from truck days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lodging {
    pub nights: Option<u32>,
    pub nightly_rate: f64,
    pub per_diem_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LodgingCost {
    pub hotel: f64,
    pub per_diem: f64,
}

/// Nights on the road implied by the truck rental: one fewer than the rental days
pub fn derive_hotel_nights(truck_days: u32) -> u32 {
    truck_days.saturating_sub(1)
}

/// Hotel and per-diem cost. Both are zero when no hotel was requested.
/// Per-diem is paid for both legs of a round trip.
pub fn lodging_cost(
    lodging: Option<&Lodging>,
    nights: u32,
    driving_days: u32,
    trip_type: TripType,
) -> LodgingCost {
    let Some(lodging) = lodging else {
        return LodgingCost::default();
    };

    LodgingCost {
        hotel: nights as f64 * lodging.nightly_rate,
        per_diem: driving_days as f64 * lodging.per_diem_rate * trip_type.leg_multiplier(),
    }
}
