use crate::domain::model::{PriceComparisonResult, StorePriceSummary};
use rust_decimal::Decimal;

/// Sort the per-store summaries, keep the cheapest `max_results`, and derive
/// the headline statistics.
///
/// Ties on `total_price` break on lexical store name, so the ranking is
/// deterministic no matter what order the stores were enumerated or
/// summarized in.
pub fn assemble(
    mut summaries: Vec<StorePriceSummary>,
    total_items: usize,
    max_results: usize,
    currency_code: &str,
) -> PriceComparisonResult {
    summaries.sort_by(|a, b| {
        a.total_price
            .cmp(&b.total_price)
            .then_with(|| a.store.cmp(&b.store))
    });
    summaries.truncate(max_results);

    let best_store = summaries.first().map(|s| s.store.clone());
    let best_total_price = summaries
        .first()
        .map(|s| s.total_price)
        .unwrap_or(Decimal::ZERO);
    let currency = summaries
        .first()
        .map(|s| s.currency.clone())
        .unwrap_or_else(|| currency_code.to_string());
    let available_items = summaries
        .iter()
        .map(|s| s.available_item_count)
        .max()
        .unwrap_or(0);

    PriceComparisonResult {
        store_summaries: summaries,
        best_store,
        best_total_price,
        currency,
        total_items,
        available_items,
    }
}
