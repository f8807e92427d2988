use serde::{Deserialize, Serialize};

/// Price list entry for one packing supply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: f64,
}

impl CatalogEntry {
    pub fn new(name: &str, unit_price: f64) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
        }
    }
}

/// Look up a supply price by name: exact match first, then case-insensitive
pub fn find_catalog_price(catalog: &[CatalogEntry], name: &str) -> Option<f64> {
    if let Some(entry) = catalog.iter().find(|e| e.name == name) {
        return Some(entry.unit_price);
    }

    let name_lower = name.trim().to_lowercase();
    catalog
        .iter()
        .find(|e| e.name.to_lowercase() == name_lower)
        .map(|e| e.unit_price)
}
