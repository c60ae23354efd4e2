// Adapters layer: concrete implementations for external systems (catalog file, local storage).

pub mod catalog;
pub mod storage;

pub use catalog::{CatalogProvider, PriceCatalog};
pub use storage::LocalStorage;
