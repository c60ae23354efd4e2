use crate::domain::model::{PriceObservation, ShoppingListItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the local price catalog. Implemented by the persistence
/// adapter; the comparison engine only ever reads through this port.
#[async_trait]
pub trait PriceDataProvider: Send + Sync {
    /// All known store names, in the provider's enumeration order.
    async fn list_stores(&self) -> Result<Vec<String>>;

    /// The most relevant observation for `item` at `store`. `Ok(None)` means
    /// no price is known there, which is not an error.
    async fn price_and_contributor(
        &self,
        item: &ShoppingListItem,
        store: &str,
    ) -> Result<Option<PriceObservation>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn max_results(&self) -> usize;
    fn currency_code(&self) -> &str;
    fn concurrent_stores(&self) -> usize;
}
