pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CatalogProvider, LocalStorage, PriceCatalog};
pub use crate::config::CliConfig;
pub use crate::core::engine::{ComparisonEngine, ComparisonOptions};
pub use crate::domain::model::{
    PriceComparisonResult, PriceObservation, ShoppingListItem, StorePriceSummary,
};
pub use crate::domain::ports::{ConfigProvider, PriceDataProvider, Storage};
pub use crate::utils::error::{CompareError, Result};
