use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::config_loader::AppConfig;
use crate::domain::enums::MarketScope;
use crate::domain::model::listing::ItemMarketEntry;
use crate::domain::traits::{CatalogueSource, MarketDataSource};
use crate::infrastructure::http;
use super::parsers::UniversalisParser;

const SERVICE: &str = "universalis";

/// HTTP client for the Universalis market-data API
pub struct UniversalisClient {
    client: Client,
    base_url: Url,
    listings_per_item: usize,
    fields: String,
}

impl UniversalisClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_client(http::build_client(&config.services)?, config)
    }

    /// Build on a shared `reqwest::Client`
    pub fn with_client(client: Client, config: &AppConfig) -> Result<Self> {
        let base_url = http::parse_base_url(SERVICE, &config.services.market_base_url)?;

        Ok(Self {
            client,
            base_url,
            listings_per_item: config.market.listings_per_item,
            fields: config.market.fields.clone(),
        })
    }

    /// `{base}/marketable`
    pub fn marketable_url(&self) -> Result<Url> {
        http::join_segments(SERVICE, &self.base_url, &["marketable"])
    }

    /// `{base}/{scope}/{id,id,...}?listings=N&entries=0&fields=...`
    pub fn market_url(&self, scope: &MarketScope, item_ids: &[u32]) -> Result<Url> {
        let ids = item_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut url = http::join_segments(SERVICE, &self.base_url, &[scope.token(), ids.as_str()])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("listings", &self.listings_per_item.to_string());
            query.append_pair("entries", "0");
            if !self.fields.is_empty() {
                query.append_pair("fields", &self.fields);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl CatalogueSource for UniversalisClient {
    async fn marketable_items(&self) -> Result<Vec<u32>> {
        let body = http::get_json(&self.client, SERVICE, self.marketable_url()?).await?;
        let ids = UniversalisParser::parse_marketable(&body)?;
        info!("Loaded {} marketable items", ids.len());
        Ok(ids)
    }
}

#[async_trait]
impl MarketDataSource for UniversalisClient {
    async fn market_entries(&self, scope: &MarketScope, item_ids: &[u32]) -> Result<Vec<ItemMarketEntry>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let body = http::get_json(&self.client, SERVICE, self.market_url(scope, item_ids)?).await?;
        let entries = UniversalisParser::parse_market_response(body);
        debug!(
            "Market data for {} items in {}: {} entries",
            item_ids.len(),
            scope,
            entries.len()
        );
        Ok(entries)
    }
}
