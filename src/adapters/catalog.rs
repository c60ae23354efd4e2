use crate::domain::model::{PriceObservation, ShoppingListItem};
use crate::domain::ports::PriceDataProvider;
use crate::utils::error::{CompareError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCatalog {
    #[serde(default)]
    pub stores: Vec<StoreEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEntry {
    pub name: String,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEntry {
    pub product: String,
    pub price: Decimal,
    pub shopper: Option<String>,
}

impl PriceCatalog {
    pub fn from_str(content: &str) -> Result<Self> {
        let catalog: PriceCatalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    fn validate(&self) -> Result<()> {
        for store in &self.stores {
            if store.name.trim().is_empty() {
                return Err(CompareError::ConfigError {
                    message: "Catalog contains a store with an empty name".to_string(),
                });
            }
            for entry in &store.prices {
                if entry.product.trim().is_empty() {
                    return Err(CompareError::ConfigError {
                        message: format!("Store {} has a price with an empty product", store.name),
                    });
                }
                if entry.price.is_sign_negative() {
                    return Err(CompareError::ConfigError {
                        message: format!(
                            "Store {} has a negative price for {}",
                            store.name, entry.product
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// [`PriceDataProvider`] backed by a TOML price catalog held in memory.
///
/// Store enumeration order is the catalog file order. Within one store the
/// last entry for a product wins.
pub struct CatalogProvider {
    store_names: Vec<String>,
    observations: HashMap<(String, String), PriceObservation>,
}

impl CatalogProvider {
    pub fn new(catalog: PriceCatalog) -> Self {
        let mut store_names = Vec::with_capacity(catalog.stores.len());
        let mut observations = HashMap::new();

        for store in catalog.stores {
            for entry in &store.prices {
                observations.insert(
                    (store.name.clone(), entry.product.trim().to_string()),
                    PriceObservation {
                        price: entry.price,
                        shopper: entry.shopper.clone(),
                    },
                );
            }
            store_names.push(store.name);
        }

        Self {
            store_names,
            observations,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(PriceCatalog::from_file(path)?))
    }
}

#[async_trait]
impl PriceDataProvider for CatalogProvider {
    async fn list_stores(&self) -> Result<Vec<String>> {
        Ok(self.store_names.clone())
    }

    async fn price_and_contributor(
        &self,
        item: &ShoppingListItem,
        store: &str,
    ) -> Result<Option<PriceObservation>> {
        Ok(self
            .observations
            .get(&(store.to_string(), item.trimmed_name().to_string()))
            .cloned())
    }
}
