pub mod catalog;
pub mod defaults;
pub mod loader;
pub mod types;

pub use catalog::{find_catalog_price, CatalogEntry};
pub use defaults::{DEFAULT_PACKING_CATALOG, DEFAULT_RATES};
pub use loader::ConfigLoader;
pub use types::*;
