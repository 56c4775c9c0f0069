use crate::domain::enums::MarketScope;
use crate::domain::model::item::ItemMeta;
use crate::domain::model::listing::ItemMarketEntry;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// All item identifiers that can be traded on the market board
    async fn marketable_items(&self) -> Result<Vec<u32>>;
}

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Current listings for a batch of items in the given scope
    async fn market_entries(&self, scope: &MarketScope, item_ids: &[u32]) -> Result<Vec<ItemMarketEntry>>;
}

#[async_trait]
pub trait ItemSearch: Send + Sync {
    /// Candidate item identifiers for free text, in relevance order
    async fn search_items(&self, query: &str) -> Result<Vec<u32>>;
}

#[async_trait]
pub trait ItemMetadataSource: Send + Sync {
    async fn item_metadata(&self, item_ids: &[u32]) -> Result<Vec<ItemMeta>>;
}
