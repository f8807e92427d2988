use super::error::{EstimateError, Result};
use super::labor::{Billing, Crew};
use super::lodging::Lodging;
use super::packing::PricedItem;
use super::travel::{DriveRates, Flight};
use super::truck::{Shuttle, TruckRates};
use super::types::{
    CrewBilling, CrewRequest, TripParameters, TripType, DEFAULT_MILES_PER_GALLON,
    DEFAULT_TOLL_UNIT_COST,
};

/// Longest accepted drive or crew time, in hours
pub const MAX_HOURS: f64 = 10_000.0;
/// Longest accepted crew or shuttle booking, in days
pub const MAX_DAYS: u32 = 3_650;

/// A validated request with every rate it needs resolved to a number
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrip {
    pub trip_type: TripType,
    pub total_miles: f64,
    pub gps_drive_hours: f64,
    pub toll_count: u32,
    pub drivers: u32,
    pub drive_rates: DriveRates,
    pub loading: Crew,
    pub unloading: Option<Crew>,
    pub shuttle: Option<Shuttle>,
    pub lodging: Option<Lodging>,
    pub packing: Vec<PricedItem>,
    pub truck: TruckRates,
    pub flight: Option<Flight>,
}

/// Check a real-valued input is finite and non-negative
fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(EstimateError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(value)
}

/// Non-negative hours bounded by [`MAX_HOURS`], so day counts derived from them fit a `u32`
fn hours(field: &str, value: f64) -> Result<f64> {
    let value = non_negative(field, value)?;
    if value > MAX_HOURS {
        return Err(EstimateError::invalid(
            field,
            format!("must not exceed {} hours (got {})", MAX_HOURS, value),
        ));
    }
    Ok(value)
}

fn days(field: &str, value: u32) -> Result<u32> {
    if value > MAX_DAYS {
        return Err(EstimateError::invalid(
            field,
            format!("must not exceed {} days (got {})", MAX_DAYS, value),
        ));
    }
    Ok(value)
}

/// Resolve a rate from its block-level value, falling back to the shared `rates` block.
/// A rate that is not needed resolves to 0; one that is needed but absent is an error.
fn rate(
    field: &str,
    local: Option<f64>,
    shared_field: &str,
    shared: Option<f64>,
    needed: bool,
) -> Result<f64> {
    if let Some(value) = shared {
        non_negative(shared_field, value)?;
    }
    match local {
        Some(value) => non_negative(field, value),
        None => match shared {
            Some(value) => Ok(value),
            None if needed => Err(EstimateError::missing(format!(
                "{} (or {})",
                field, shared_field
            ))),
            None => Ok(0.0),
        },
    }
}

fn crew(path: &str, request: &CrewRequest, params: &TripParameters) -> Result<Crew> {
    if request.worker_count == 0 {
        return Err(EstimateError::invalid(
            format!("{}.workerCount", path),
            "must be at least 1",
        ));
    }

    let billing = match request.billing {
        CrewBilling::Daily {
            days: booked,
            daily_rate,
        } => {
            let booked = days(&format!("{}.days", path), booked)?;
            Billing::Daily {
                days: booked,
                rate: rate(
                    &format!("{}.dailyRate", path),
                    daily_rate,
                    "rates.laborDailyRate",
                    params.rates.labor_daily_rate,
                    booked > 0,
                )?,
            }
        }
        CrewBilling::Hourly {
            hours: worked,
            hourly_rate,
        } => {
            let worked = hours(&format!("{}.hours", path), worked)?;
            Billing::Hourly {
                hours: worked,
                rate: rate(
                    &format!("{}.hourlyRate", path),
                    hourly_rate,
                    "rates.laborHourlyRate",
                    params.rates.labor_hourly_rate,
                    worked > 0.0,
                )?,
            }
        }
    };

    Ok(Crew {
        workers: request.worker_count,
        billing,
    })
}

/// The block behind a gating flag, or an error when the flag is set without one
fn gated<'a, T>(
    flag: bool,
    block: Option<&'a T>,
    flag_name: &str,
    block_name: &str,
) -> Result<Option<&'a T>> {
    match (flag, block) {
        (false, _) => Ok(None),
        (true, Some(block)) => Ok(Some(block)),
        (true, None) => Err(EstimateError::invalid(
            block_name,
            format!("is required when {} is set", flag_name),
        )),
    }
}

/// Validate every field and resolve every needed rate before any cost is computed
pub fn resolve(params: &TripParameters) -> Result<ResolvedTrip> {
    let rates = &params.rates;
    let total_miles = non_negative("totalMiles", params.total_miles)?;
    let gps_drive_hours = hours("gpsDriveHours", params.gps_drive_hours)?;

    if params.number_of_drivers == 0 {
        return Err(EstimateError::invalid(
            "numberOfDrivers",
            "must be at least 1",
        ));
    }

    let miles_per_gallon = non_negative(
        "rates.fuelEfficiencyMilesPerGallon",
        rates
            .fuel_efficiency_miles_per_gallon
            .unwrap_or(DEFAULT_MILES_PER_GALLON),
    )?;
    if miles_per_gallon == 0.0 {
        return Err(EstimateError::invalid(
            "rates.fuelEfficiencyMilesPerGallon",
            "must be greater than 0",
        ));
    }

    let driver_field = match params.trip_type {
        TripType::OneWay => "rates.oneWayDriverHourly",
        TripType::RoundTrip => "rates.roundTripDriverHourly",
    };
    let driver_hourly = match rates.driver_hourly(params.trip_type) {
        Some(value) => non_negative(driver_field, value)?,
        None if gps_drive_hours > 0.0 => return Err(EstimateError::missing(driver_field)),
        None => 0.0,
    };
    let fuel_price_per_gallon = match rates.fuel_price_per_gallon {
        Some(value) => non_negative("rates.fuelPricePerGallon", value)?,
        None if total_miles > 0.0 => {
            return Err(EstimateError::missing("rates.fuelPricePerGallon"))
        }
        None => 0.0,
    };
    let toll_unit_cost = non_negative(
        "rates.tollUnitCost",
        rates.toll_unit_cost.unwrap_or(DEFAULT_TOLL_UNIT_COST),
    )?;

    let drive_rates = DriveRates {
        driver_hourly,
        fuel_price_per_gallon,
        miles_per_gallon,
        toll_unit_cost,
    };

    let loading = crew("loading", &params.loading, params)?;

    let unloading = gated(
        params.needs_unloaders,
        params.unloading.as_ref(),
        "needsUnloaders",
        "unloading",
    )?
    .map(|request| crew("unloading", request, params))
    .transpose()?;

    let shuttle = gated(
        params.needs_shuttle,
        params.shuttle.as_ref(),
        "needsShuttle",
        "shuttle",
    )?
    .map(|request| -> Result<Shuttle> {
        let miles = non_negative("shuttle.miles", request.miles)?;
        let booked = days("shuttle.days", request.days)?;
        Ok(Shuttle {
            days: booked,
            daily_rate: rate(
                "shuttle.dailyRate",
                request.daily_rate,
                "rates.shuttleDailyRate",
                rates.shuttle_daily_rate,
                booked > 0,
            )?,
            miles,
            mileage_rate: rate(
                "shuttle.mileageRate",
                request.mileage_rate,
                "rates.shuttleMileageRate",
                rates.shuttle_mileage_rate,
                miles > 0.0,
            )?,
        })
    })
    .transpose()?;

    let lodging = gated(params.needs_hotel, params.hotel.as_ref(), "needsHotel", "hotel")?
        .map(|request| -> Result<Lodging> {
            Ok(Lodging {
                nights: request.nights,
                nightly_rate: rate(
                    "hotel.nightlyRate",
                    request.nightly_rate,
                    "rates.hotelNightlyRate",
                    rates.hotel_nightly_rate,
                    true,
                )?,
                per_diem_rate: rate(
                    "hotel.perDiemRate",
                    request.per_diem_rate,
                    "rates.perDiemRate",
                    rates.per_diem_rate,
                    true,
                )?,
            })
        })
        .transpose()?;

    let packing = if params.needs_packing {
        params
            .packing
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<PricedItem> {
                let field = format!("packing[{}].unitPrice", index);
                let unit_price = match item.unit_price {
                    Some(price) => non_negative(&field, price)?,
                    None if item.quantity > 0 => {
                        return Err(EstimateError::missing(format!("{} ({})", field, item.name)))
                    }
                    None => 0.0,
                };
                Ok(PricedItem {
                    unit_price,
                    quantity: item.quantity,
                })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let truck = TruckRates {
        daily_rate: rate(
            "truck.dailyRate",
            params.truck.daily_rate,
            "rates.truckDailyRate",
            rates.truck_daily_rate,
            true,
        )?,
        mileage_rate: rate(
            "truck.mileageRate",
            params.truck.mileage_rate,
            "rates.truckMileageRate",
            rates.truck_mileage_rate,
            total_miles > 0.0,
        )?,
    };

    let flight = match (params.trip_type, params.flight.as_ref()) {
        (TripType::OneWay, Some(request)) => Some(Flight {
            returning_people: request.returning_people_count,
            ticket_rate: rate(
                "flight.ticketRate",
                request.ticket_rate,
                "rates.flightTicketRate",
                rates.flight_ticket_rate,
                request.returning_people_count > 0,
            )?,
        }),
        _ => None,
    };

    Ok(ResolvedTrip {
        trip_type: params.trip_type,
        total_miles,
        gps_drive_hours,
        toll_count: params.toll_count,
        drivers: params.number_of_drivers,
        drive_rates,
        loading,
        unloading,
        shuttle,
        lodging,
        packing,
        truck,
        flight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::types::{
        FlightRequest, HotelRequest, PackingItem, RateConfiguration, ShuttleRequest,
    };

    fn base_params() -> TripParameters {
        TripParameters {
            trip_type: TripType::OneWay,
            total_miles: 1200.0,
            gps_drive_hours: 20.0,
            toll_count: 3,
            number_of_drivers: 1,
            loading: CrewRequest {
                worker_count: 2,
                billing: CrewBilling::Daily {
                    days: 1,
                    daily_rate: Some(300.0),
                },
            },
            needs_unloaders: false,
            unloading: None,
            needs_shuttle: false,
            shuttle: None,
            needs_hotel: false,
            hotel: None,
            needs_packing: false,
            packing: Vec::new(),
            truck: Default::default(),
            flight: None,
            rates: RateConfiguration {
                one_way_driver_hourly: Some(40.0),
                fuel_price_per_gallon: Some(4.0),
                truck_daily_rate: Some(300.0),
                truck_mileage_rate: Some(0.3),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_resolve_base() {
        let resolved = resolve(&base_params()).unwrap();
        assert_eq!(resolved.drive_rates.driver_hourly, 40.0);
        assert_eq!(resolved.truck.daily_rate, 300.0);
        assert!(resolved.unloading.is_none());
        assert!(resolved.flight.is_none());
    }

    #[test]
    fn test_negative_miles_rejected() {
        let mut params = base_params();
        params.total_miles = -1.0;
        let err = resolve(&params).unwrap_err();
        assert_eq!(err.field(), "totalMiles");
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = base_params();
        params.gps_drive_hours = f64::NAN;
        assert!(matches!(
            resolve(&params),
            Err(EstimateError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_zero_drivers_rejected() {
        let mut params = base_params();
        params.number_of_drivers = 0;
        assert_eq!(resolve(&params).unwrap_err().field(), "numberOfDrivers");
    }

    #[test]
    fn test_block_rate_overrides_shared_rate() {
        let mut params = base_params();
        params.rates.labor_daily_rate = Some(250.0);
        let resolved = resolve(&params).unwrap();
        assert_eq!(
            resolved.loading.billing,
            Billing::Daily {
                days: 1,
                rate: 300.0
            }
        );
    }

    #[test]
    fn test_missing_flight_rate_is_configuration_missing() {
        let mut params = base_params();
        params.flight = Some(FlightRequest {
            returning_people_count: 2,
            ticket_rate: None,
        });
        let err = resolve(&params).unwrap_err();
        assert!(matches!(err, EstimateError::ConfigurationMissing { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_flight_ignored_for_round_trip() {
        let mut params = base_params();
        params.trip_type = TripType::RoundTrip;
        params.rates.round_trip_driver_hourly = Some(50.0);
        params.flight = Some(FlightRequest {
            returning_people_count: 2,
            ticket_rate: None,
        });
        let resolved = resolve(&params).unwrap();
        assert!(resolved.flight.is_none());
        assert_eq!(resolved.drive_rates.driver_hourly, 50.0);
    }

    #[test]
    fn test_missing_round_trip_driver_rate() {
        let mut params = base_params();
        params.trip_type = TripType::RoundTrip;
        let err = resolve(&params).unwrap_err();
        assert_eq!(
            err,
            EstimateError::missing("rates.roundTripDriverHourly")
        );
    }

    #[test]
    fn test_flag_without_block_rejected() {
        let mut params = base_params();
        params.needs_hotel = true;
        assert_eq!(resolve(&params).unwrap_err().field(), "hotel");
    }

    #[test]
    fn test_unflagged_block_not_read() {
        let mut params = base_params();
        params.hotel = Some(HotelRequest {
            nights: Some(2),
            nightly_rate: None,
            per_diem_rate: None,
        });
        let resolved = resolve(&params).unwrap();
        assert!(resolved.lodging.is_none());
    }

    #[test]
    fn test_unpriced_packing_item() {
        let mut params = base_params();
        params.needs_packing = true;
        params.packing = vec![
            PackingItem {
                name: "Tape".to_string(),
                unit_price: None,
                quantity: 0,
            },
            PackingItem {
                name: "Large Box".to_string(),
                unit_price: None,
                quantity: 5,
            },
        ];
        let err = resolve(&params).unwrap_err();
        assert_eq!(err.field(), "packing[1].unitPrice (Large Box)");
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut params = base_params();
        params.loading.worker_count = 0;
        assert_eq!(resolve(&params).unwrap_err().field(), "loading.workerCount");
    }

    #[test]
    fn test_toll_and_efficiency_fall_back_when_unset() {
        let resolved = resolve(&base_params()).unwrap();
        assert_eq!(resolved.drive_rates.miles_per_gallon, DEFAULT_MILES_PER_GALLON);
        assert_eq!(resolved.drive_rates.toll_unit_cost, DEFAULT_TOLL_UNIT_COST);

        let mut params = base_params();
        params.rates.fuel_efficiency_miles_per_gallon = Some(8.0);
        params.rates.toll_unit_cost = Some(120.0);
        let resolved = resolve(&params).unwrap();
        assert_eq!(resolved.drive_rates.miles_per_gallon, 8.0);
        assert_eq!(resolved.drive_rates.toll_unit_cost, 120.0);
    }

    #[test]
    fn test_zero_efficiency_rejected() {
        let mut params = base_params();
        params.rates.fuel_efficiency_miles_per_gallon = Some(0.0);
        let err = resolve(&params).unwrap_err();
        assert_eq!(err.field(), "rates.fuelEfficiencyMilesPerGallon");
    }

    #[test]
    fn test_excessive_drive_hours_rejected() {
        let mut params = base_params();
        params.gps_drive_hours = 1e12;
        let err = resolve(&params).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), "gpsDriveHours");

        params.gps_drive_hours = MAX_HOURS;
        assert!(resolve(&params).is_ok());
    }

    #[test]
    fn test_excessive_crew_time_rejected() {
        let mut params = base_params();
        params.loading.billing = CrewBilling::Hourly {
            hours: 1e12,
            hourly_rate: Some(40.0),
        };
        assert_eq!(resolve(&params).unwrap_err().field(), "loading.hours");

        params.loading.billing = CrewBilling::Daily {
            days: u32::MAX,
            daily_rate: Some(300.0),
        };
        assert_eq!(resolve(&params).unwrap_err().field(), "loading.days");
    }

    #[test]
    fn test_excessive_shuttle_days_rejected() {
        let mut params = base_params();
        params.needs_shuttle = true;
        params.shuttle = Some(ShuttleRequest {
            days: MAX_DAYS + 1,
            daily_rate: Some(250.0),
            miles: 0.0,
            mileage_rate: None,
        });
        assert_eq!(resolve(&params).unwrap_err().field(), "shuttle.days");
    }
}
