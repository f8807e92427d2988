/// Hours in one shift-equivalent day for hourly crews
pub const SHIFT_HOURS: f64 = 8.0;

/// Resolved billing for one crew
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Billing {
    Daily { days: u32, rate: f64 },
    Hourly { hours: f64, rate: f64 },
}

/// Loader or unloader crew with its rate resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crew {
    pub workers: u32,
    pub billing: Billing,
}

impl Crew {
    pub fn cost(&self) -> f64 {
        let workers = self.workers as f64;
        match self.billing {
            Billing::Daily { days, rate } => workers * days as f64 * rate,
            Billing::Hourly { hours, rate } => workers * hours * rate,
        }
    }

    /// Days this crew keeps the truck: the day count, or ceil(hours / 8)
    pub fn day_equivalent(&self) -> u32 {
        match self.billing {
            Billing::Daily { days, .. } => days,
            Billing::Hourly { hours, .. } => (hours / SHIFT_HOURS).ceil() as u32,
        }
    }
}

/// Loader cost plus unloader cost, if unloaders were requested
pub fn labor_cost(loading: &Crew, unloading: Option<&Crew>) -> f64 {
    loading.cost() + unloading.map(Crew::cost).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(workers: u32, days: u32, rate: f64) -> Crew {
        Crew {
            workers,
            billing: Billing::Daily { days, rate },
        }
    }

    fn hourly(workers: u32, hours: f64, rate: f64) -> Crew {
        Crew {
            workers,
            billing: Billing::Hourly { hours, rate },
        }
    }

    #[test]
    fn test_daily_crew_cost() {
        assert_eq!(daily(2, 1, 300.0).cost(), 600.0);
        assert_eq!(daily(3, 2, 250.0).cost(), 1500.0);
    }

    #[test]
    fn test_hourly_crew_cost() {
        assert_eq!(hourly(2, 6.5, 40.0).cost(), 520.0);
    }

    #[test]
    fn test_mixed_modes_sum() {
        let loaders = daily(2, 1, 300.0);
        let unloaders = hourly(3, 5.0, 35.0);
        assert_eq!(labor_cost(&loaders, Some(&unloaders)), 600.0 + 525.0);
        assert_eq!(labor_cost(&loaders, None), 600.0);
    }

    #[test]
    fn test_day_equivalent() {
        assert_eq!(daily(2, 3, 300.0).day_equivalent(), 3);
        assert_eq!(hourly(2, 8.0, 40.0).day_equivalent(), 1);
        assert_eq!(hourly(2, 8.5, 40.0).day_equivalent(), 2);
        assert_eq!(hourly(2, 0.0, 40.0).day_equivalent(), 0);
    }
}
