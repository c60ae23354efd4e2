use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry on the user's shopping list. The product name is the aggregation
/// key; entries whose name is empty after trimming are ignored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub product_name: String,
}

impl ShoppingListItem {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }

    pub fn trimmed_name(&self) -> &str {
        self.product_name.trim()
    }
}

/// One store's reported price for one product, optionally attributed to the
/// shopper who last reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub price: Decimal,
    pub shopper: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePriceSummary {
    pub store: String,
    pub total_price: Decimal,
    pub currency: String,
    pub available_item_count: usize,
    pub unavailable_item_count: usize,
    pub item_prices: BTreeMap<String, Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_shoppers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparisonResult {
    /// Cheapest first, at most `max_results` entries.
    pub store_summaries: Vec<StorePriceSummary>,
    pub best_store: Option<String>,
    pub best_total_price: Decimal,
    pub currency: String,
    /// Count of list items with a non-empty name.
    pub total_items: usize,
    /// Best coverage among the returned stores, not a sum.
    pub available_items: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_name() {
        let item = ShoppingListItem::new("  Milk  ");
        assert_eq!(item.trimmed_name(), "Milk");
    }

    #[test]
    fn test_item_shoppers_omitted_when_none() {
        let summary = StorePriceSummary {
            store: "A".to_string(),
            total_price: Decimal::new(250, 2),
            currency: "USD".to_string(),
            available_item_count: 1,
            unavailable_item_count: 1,
            item_prices: BTreeMap::from([("Milk".to_string(), Decimal::new(250, 2))]),
            item_shoppers: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("item_shoppers").is_none());
        // serde-with-str 讓金額以字串輸出，避免浮點誤差
        assert_eq!(json["total_price"], "2.50");
    }
}
