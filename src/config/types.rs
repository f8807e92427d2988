use super::catalog::{find_catalog_price, CatalogEntry};
use crate::debug_println;
use crate::estimate::{RateConfiguration, TripParameters};
use serde::{Deserialize, Serialize};

/// Operator configuration: house rates and the packing-supply price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub rates: RateConfiguration,
    #[serde(default)]
    pub packing_catalog: Vec<CatalogEntry>,
}

impl Config {
    /// Fill the request's unset rates and unpriced packing items from this configuration.
    /// Anything the request already sets is left alone.
    pub fn apply_defaults(&self, mut params: TripParameters) -> TripParameters {
        params.rates.fill_from(&self.rates);

        if std::env::var("MOVEQUOTE_DISABLE_PACKING_CATALOG").is_ok() {
            debug_println!("Packing catalog disabled, items must carry their own prices");
            return params;
        }

        for item in params.packing.iter_mut().filter(|i| i.unit_price.is_none()) {
            item.unit_price = find_catalog_price(&self.packing_catalog, &item.name);
            match item.unit_price {
                Some(price) => debug_println!("Catalog price for '{}': {:.2}", item.name, price),
                None => debug_println!("No catalog price for '{}'", item.name),
            }
        }

        params
    }
}
