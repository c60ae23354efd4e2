use crate::core::ranking;
use crate::domain::model::{PriceComparisonResult, ShoppingListItem, StorePriceSummary};
use crate::domain::ports::{ConfigProvider, PriceDataProvider};
use crate::utils::error::{CompareError, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub const DEFAULT_MAX_RESULTS: usize = 3;
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_CONCURRENT_STORES: usize = 4;

#[derive(Debug, Clone)]
pub struct ComparisonOptions {
    pub max_results: usize,
    pub currency_code: String,
    pub concurrent_stores: usize,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            currency_code: DEFAULT_CURRENCY.to_string(),
            concurrent_stores: DEFAULT_CONCURRENT_STORES,
        }
    }
}

impl ComparisonOptions {
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self {
            max_results: config.max_results(),
            currency_code: config.currency_code().to_string(),
            concurrent_stores: config.concurrent_stores(),
        }
    }
}

/// Compares a shopping list against every store the provider knows and ranks
/// the stores by total cost. Stateless apart from the injected provider.
pub struct ComparisonEngine<P> {
    provider: Arc<P>,
    options: ComparisonOptions,
}

impl<P: PriceDataProvider + 'static> ComparisonEngine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, ComparisonOptions::default())
    }

    pub fn with_options(provider: P, options: ComparisonOptions) -> Self {
        Self {
            provider: Arc::new(provider),
            options,
        }
    }

    /// Build a ranked [`PriceComparisonResult`] for `list`.
    ///
    /// Only provider failures surface as errors; a missing price is the
    /// "unavailable" branch of the aggregation, and an empty catalog yields
    /// an empty result. One failed lookup aborts the whole comparison.
    pub async fn compare(&self, list: &[ShoppingListItem]) -> Result<PriceComparisonResult> {
        // 沒有名稱的項目直接略過，不列入 total_items
        let items: Arc<Vec<ShoppingListItem>> = Arc::new(
            list.iter()
                .filter(|item| !item.trimmed_name().is_empty())
                .cloned()
                .collect(),
        );
        let total_items = items.len();

        let stores = self.provider.list_stores().await?;
        tracing::debug!(
            "Comparing {} items across {} stores",
            total_items,
            stores.len()
        );

        if stores.is_empty() {
            tracing::warn!("Price catalog knows no stores");
            return Ok(ranking::assemble(
                Vec::new(),
                total_items,
                self.options.max_results,
                &self.options.currency_code,
            ));
        }

        // 每家店各開一個任務，fan-out 後在這裡 fan-in
        let semaphore = Arc::new(Semaphore::new(self.options.concurrent_stores));
        let mut tasks: JoinSet<Result<(usize, Option<StorePriceSummary>)>> = JoinSet::new();

        for (index, store) in stores.into_iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let items = Arc::clone(&items);
            let semaphore = Arc::clone(&semaphore);
            let currency = self.options.currency_code.clone();

            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| CompareError::data_access("comparison was cancelled"))?;
                let summary = summarize_store(provider.as_ref(), &items, &store, &currency).await?;
                Ok((index, summary))
            });
        }

        let mut indexed: Vec<(usize, StorePriceSummary)> = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            // 任一查價失敗就整個比價中止；JoinSet 丟棄時會 abort 其餘任務
            let (index, summary) = joined
                .map_err(|e| CompareError::data_access(format!("store task failed: {}", e)))??;
            if let Some(summary) = summary {
                indexed.push((index, summary));
            }
        }

        // 還原店家枚舉順序後才交給排序
        indexed.sort_by_key(|(index, _)| *index);
        let summaries = indexed.into_iter().map(|(_, summary)| summary).collect();

        Ok(ranking::assemble(
            summaries,
            total_items,
            self.options.max_results,
            &self.options.currency_code,
        ))
    }
}

/// Aggregate one store. Returns `None` when the store has no priced item at
/// all; such stores never appear in the result.
async fn summarize_store<P: PriceDataProvider>(
    provider: &P,
    items: &[ShoppingListItem],
    store: &str,
    currency: &str,
) -> Result<Option<StorePriceSummary>> {
    let mut total_price = Decimal::ZERO;
    let mut available_item_count = 0;
    let mut unavailable_item_count = 0;
    let mut item_prices = BTreeMap::new();
    let mut item_shoppers = BTreeMap::new();

    for item in items {
        match provider.price_and_contributor(item, store).await? {
            Some(observation) if observation.price > Decimal::ZERO => {
                total_price += observation.price;
                available_item_count += 1;
                item_prices.insert(item.trimmed_name().to_string(), observation.price);
                if let Some(shopper) = observation.shopper {
                    item_shoppers.insert(item.trimmed_name().to_string(), shopper);
                }
            }
            // 查無價格或價格為 0 一律視為該店缺貨
            _ => unavailable_item_count += 1,
        }
    }

    if available_item_count == 0 {
        tracing::debug!("Store {} has no priced items, skipping", store);
        return Ok(None);
    }

    Ok(Some(StorePriceSummary {
        store: store.to_string(),
        total_price,
        currency: currency.to_string(),
        available_item_count,
        unavailable_item_count,
        item_prices,
        item_shoppers: if item_shoppers.is_empty() {
            None
        } else {
            Some(item_shoppers)
        },
    }))
}
