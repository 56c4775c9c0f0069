use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::config_loader::AppConfig;
use crate::domain::model::item::ItemMeta;
use crate::domain::traits::{ItemMetadataSource, ItemSearch};
use crate::infrastructure::http;
use super::parsers::XivApiParser;

const SERVICE: &str = "xivapi";

/// HTTP client for XIVAPI item search and item metadata
pub struct XivApiClient {
    client: Client,
    base_url: Url,
    search_limit: usize,
}

impl XivApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_client(http::build_client(&config.services)?, config)
    }

    pub fn with_client(client: Client, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: http::parse_base_url(SERVICE, &config.services.item_data_base_url)?,
            search_limit: config.search.result_limit,
        })
    }

    /// `{base}/search?string=...&indexes=Item&columns=ID&limit=N`
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = http::join_segments(SERVICE, &self.base_url, &["search"])?;
        url.query_pairs_mut()
            .append_pair("string", query)
            .append_pair("indexes", "Item")
            .append_pair("columns", "ID")
            .append_pair("limit", &self.search_limit.to_string());
        Ok(url)
    }

    /// `{base}/Item?ids=1,2,3&columns=ID,Name,Icon`
    pub fn metadata_url(&self, item_ids: &[u32]) -> Result<Url> {
        let ids = item_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut url = http::join_segments(SERVICE, &self.base_url, &["Item"])?;
        url.query_pairs_mut()
            .append_pair("ids", &ids)
            .append_pair("columns", "ID,Name,Icon");
        Ok(url)
    }
}

#[async_trait]
impl ItemSearch for XivApiClient {
    async fn search_items(&self, query: &str) -> Result<Vec<u32>> {
        let body = http::get_json(&self.client, SERVICE, self.search_url(query)?).await?;
        let ids = XivApiParser::parse_search_ids(&body)?;
        debug!("Search '{}' returned {} candidates", query, ids.len());
        Ok(ids)
    }
}

#[async_trait]
impl ItemMetadataSource for XivApiClient {
    async fn item_metadata(&self, item_ids: &[u32]) -> Result<Vec<ItemMeta>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let body = http::get_json(&self.client, SERVICE, self.metadata_url(item_ids)?).await?;
        XivApiParser::parse_item_metadata(&body)
    }
}
