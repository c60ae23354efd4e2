pub mod engine;
pub mod ranking;

pub use crate::domain::model::{
    PriceComparisonResult, PriceObservation, ShoppingListItem, StorePriceSummary,
};
pub use crate::domain::ports::{ConfigProvider, PriceDataProvider, Storage};
pub use crate::utils::error::Result;
