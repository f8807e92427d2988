/// GPS hours after which a mandated break is added
pub const BREAK_BLOCK_HOURS: f64 = 6.0;
/// Break hours added per full block
pub const BREAK_HOURS_PER_BLOCK: f64 = 2.0;
/// Working hours in one driving day
pub const DRIVING_DAY_HOURS: f64 = 9.0;

/// Route measurements normalized for rest breaks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripMetrics {
    pub adjusted_drive_hours: f64,
    pub driving_days: u32,
}

impl TripMetrics {
    /// Add 2 hours per full 6 hours of GPS drive time, then round up to 9-hour days
    pub fn from_gps_hours(gps_drive_hours: f64) -> Self {
        let extra_hours = (gps_drive_hours / BREAK_BLOCK_HOURS).floor() * BREAK_HOURS_PER_BLOCK;
        let adjusted_drive_hours = gps_drive_hours + extra_hours;

        Self {
            adjusted_drive_hours,
            driving_days: driving_days(adjusted_drive_hours),
        }
    }
}

/// Partial days bill as full days
pub fn driving_days(adjusted_drive_hours: f64) -> u32 {
    if adjusted_drive_hours <= 0.0 {
        return 0;
    }
    (adjusted_drive_hours / DRIVING_DAY_HOURS).ceil() as u32
}
