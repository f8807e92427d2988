use serde::{Deserialize, Serialize};

/// Default fuel efficiency of a loaded moving truck
pub const DEFAULT_MILES_PER_GALLON: f64 = 5.0;
/// Default cost billed per toll occurrence
pub const DEFAULT_TOLL_UNIT_COST: f64 = 100.0;

/// Move type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Number of legs billed for per-diem and tolls
    pub fn leg_multiplier(self) -> f64 {
        match self {
            TripType::OneWay => 1.0,
            TripType::RoundTrip => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TripType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one-way" | "oneway" | "one_way" => Ok(TripType::OneWay),
            "round-trip" | "roundtrip" | "round_trip" => Ok(TripType::RoundTrip),
            other => Err(format!(
                "unknown trip type '{}', expected one-way or round-trip",
                other
            )),
        }
    }
}

/// How a crew is billed. Each mode carries only its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "billingMode", rename_all = "lowercase")]
pub enum CrewBilling {
    #[serde(rename_all = "camelCase")]
    Daily {
        days: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        daily_rate: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Hourly {
        hours: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hourly_rate: Option<f64>,
    },
}

/// Loader or unloader crew request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRequest {
    pub worker_count: u32,
    #[serde(flatten)]
    pub billing: CrewBilling,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuttleRequest {
    pub days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub miles: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRequest {
    /// Derived from truck days when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_diem_rate: Option<f64>,
}

/// Packing supply line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub quantity: u32,
}

/// Truck rental rates. The day count is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_rate: Option<f64>,
}

/// Return flights for a one-way crew
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    pub returning_people_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_rate: Option<f64>,
}

/// Unit rates. Block-level rates in [`TripParameters`] take precedence over these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_way_driver_hourly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_trip_driver_hourly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_price_per_gallon: Option<f64>,
    /// Falls back to [`DEFAULT_MILES_PER_GALLON`] when unset after the config merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency_miles_per_gallon: Option<f64>,
    /// Falls back to [`DEFAULT_TOLL_UNIT_COST`] when unset after the config merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_nightly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_diem_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_mileage_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuttle_daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuttle_mileage_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_ticket_rate: Option<f64>,
}

impl RateConfiguration {
    /// Driver hourly rate for the given move type
    pub fn driver_hourly(&self, trip_type: TripType) -> Option<f64> {
        match trip_type {
            TripType::OneWay => self.one_way_driver_hourly,
            TripType::RoundTrip => self.round_trip_driver_hourly,
        }
    }

    /// Fill every unset rate from `defaults`. Rates already set are kept.
    pub fn fill_from(&mut self, defaults: &RateConfiguration) {
        fn fill(slot: &mut Option<f64>, fallback: Option<f64>) {
            if slot.is_none() {
                *slot = fallback;
            }
        }

        fill(&mut self.one_way_driver_hourly, defaults.one_way_driver_hourly);
        fill(
            &mut self.round_trip_driver_hourly,
            defaults.round_trip_driver_hourly,
        );
        fill(&mut self.fuel_price_per_gallon, defaults.fuel_price_per_gallon);
        fill(
            &mut self.fuel_efficiency_miles_per_gallon,
            defaults.fuel_efficiency_miles_per_gallon,
        );
        fill(&mut self.toll_unit_cost, defaults.toll_unit_cost);
        fill(&mut self.labor_daily_rate, defaults.labor_daily_rate);
        fill(&mut self.labor_hourly_rate, defaults.labor_hourly_rate);
        fill(&mut self.hotel_nightly_rate, defaults.hotel_nightly_rate);
        fill(&mut self.per_diem_rate, defaults.per_diem_rate);
        fill(&mut self.truck_daily_rate, defaults.truck_daily_rate);
        fill(&mut self.truck_mileage_rate, defaults.truck_mileage_rate);
        fill(&mut self.shuttle_daily_rate, defaults.shuttle_daily_rate);
        fill(&mut self.shuttle_mileage_rate, defaults.shuttle_mileage_rate);
        fill(&mut self.flight_ticket_rate, defaults.flight_ticket_rate);
    }
}

/// One quote request, constructed fresh per estimate call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub trip_type: TripType,
    pub total_miles: f64,
    pub gps_drive_hours: f64,
    #[serde(default)]
    pub toll_count: u32,
    pub number_of_drivers: u32,
    pub loading: CrewRequest,
    #[serde(default)]
    pub needs_unloaders: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unloading: Option<CrewRequest>,
    #[serde(default)]
    pub needs_shuttle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuttle: Option<ShuttleRequest>,
    #[serde(default)]
    pub needs_hotel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<HotelRequest>,
    #[serde(default)]
    pub needs_packing: bool,
    #[serde(default)]
    pub packing: Vec<PackingItem>,
    #[serde(default)]
    pub truck: TruckRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightRequest>,
    #[serde(default)]
    pub rates: RateConfiguration,
}

/// Estimate result. Category fields are costs; the rest are trip facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub driver_pay: f64,
    pub fuel_cost: f64,
    pub labor_cost: f64,
    pub hotel_cost: f64,
    pub per_diem_cost: f64,
    pub packing_cost: f64,
    pub truck_cost: f64,
    pub shuttle_cost: f64,
    pub flight_cost: f64,
    pub toll_cost: f64,
    pub adjusted_drive_hours: f64,
    pub driving_days: u32,
    pub truck_days: u32,
    pub hotel_nights: u32,
    pub total: f64,
}

impl CostBreakdown {
    /// The ten category fields, in presentation order
    pub fn categories(&self) -> [(&'static str, f64); 10] {
        [
            ("driverPay", self.driver_pay),
            ("fuelCost", self.fuel_cost),
            ("laborCost", self.labor_cost),
            ("hotelCost", self.hotel_cost),
            ("perDiemCost", self.per_diem_cost),
            ("packingCost", self.packing_cost),
            ("truckCost", self.truck_cost),
            ("shuttleCost", self.shuttle_cost),
            ("flightCost", self.flight_cost),
            ("tollCost", self.toll_cost),
        ]
    }

    /// Sum of the category fields
    pub fn category_sum(&self) -> f64 {
        self.categories().iter().map(|(_, value)| value).sum()
    }

    /// Presentation copy with every amount rounded to cents.
    /// The total is re-summed from the rounded categories.
    pub fn rounded_to_cents(&self) -> CostBreakdown {
        let mut rounded = CostBreakdown {
            driver_pay: round_cents(self.driver_pay),
            fuel_cost: round_cents(self.fuel_cost),
            labor_cost: round_cents(self.labor_cost),
            hotel_cost: round_cents(self.hotel_cost),
            per_diem_cost: round_cents(self.per_diem_cost),
            packing_cost: round_cents(self.packing_cost),
            truck_cost: round_cents(self.truck_cost),
            shuttle_cost: round_cents(self.shuttle_cost),
            flight_cost: round_cents(self.flight_cost),
            toll_cost: round_cents(self.toll_cost),
            adjusted_drive_hours: round_cents(self.adjusted_drive_hours),
            ..*self
        };
        rounded.total = round_cents(rounded.category_sum());
        rounded
    }
}

/// Round half away from zero to two decimals
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_type_parse() {
        assert_eq!("one-way".parse::<TripType>().unwrap(), TripType::OneWay);
        assert_eq!("Round-Trip".parse::<TripType>().unwrap(), TripType::RoundTrip);
        assert!("return".parse::<TripType>().is_err());
    }

    #[test]
    fn test_crew_billing_json_shape() {
        let crew: CrewRequest = serde_json::from_str(
            r#"{"workerCount": 3, "billingMode": "hourly", "hours": 10, "hourlyRate": 45}"#,
        )
        .unwrap();

        assert_eq!(crew.worker_count, 3);
        assert_eq!(
            crew.billing,
            CrewBilling::Hourly {
                hours: 10.0,
                hourly_rate: Some(45.0)
            }
        );

        let daily: CrewRequest =
            serde_json::from_str(r#"{"workerCount": 2, "billingMode": "daily", "days": 1}"#)
                .unwrap();
        assert_eq!(
            daily.billing,
            CrewBilling::Daily {
                days: 1,
                daily_rate: None
            }
        );
    }

    #[test]
    fn test_rate_configuration_defaults() {
        let rates: RateConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(rates, RateConfiguration::default());
        assert!(rates.fuel_efficiency_miles_per_gallon.is_none());
        assert!(rates.toll_unit_cost.is_none());
        assert_eq!(serde_json::to_string(&rates).unwrap(), "{}");
    }

    #[test]
    fn test_fill_from_keeps_request_rates() {
        let mut request = RateConfiguration {
            one_way_driver_hourly: Some(45.0),
            ..Default::default()
        };
        let defaults = RateConfiguration {
            one_way_driver_hourly: Some(40.0),
            fuel_price_per_gallon: Some(4.25),
            ..Default::default()
        };

        request.fill_from(&defaults);
        assert_eq!(request.one_way_driver_hourly, Some(45.0));
        assert_eq!(request.fuel_price_per_gallon, Some(4.25));
        assert_eq!(request.flight_ticket_rate, None);
    }

    #[test]
    fn test_fill_from_copies_toll_and_efficiency() {
        let mut request = RateConfiguration {
            toll_unit_cost: Some(90.0),
            ..Default::default()
        };
        let defaults = RateConfiguration {
            fuel_efficiency_miles_per_gallon: Some(8.0),
            toll_unit_cost: Some(120.0),
            ..Default::default()
        };

        request.fill_from(&defaults);
        assert_eq!(request.fuel_efficiency_miles_per_gallon, Some(8.0));
        assert_eq!(request.toll_unit_cost, Some(90.0));
    }

    #[test]
    fn test_rounded_total_matches_rounded_categories() {
        let breakdown = CostBreakdown {
            driver_pay: 10.004,
            fuel_cost: 20.004,
            toll_cost: 0.005,
            total: 30.013,
            ..Default::default()
        };

        let rounded = breakdown.rounded_to_cents();
        assert_eq!(rounded.driver_pay, 10.0);
        assert_eq!(rounded.fuel_cost, 20.0);
        assert_eq!(rounded.toll_cost, 0.01);
        assert_eq!(rounded.total, 30.01);
    }
}
