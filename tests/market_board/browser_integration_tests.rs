use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use xiv_market_board::config_loader::AppConfig;
use xiv_market_board::domain::enums::MarketScope;
use xiv_market_board::domain::model::item::ItemMeta;
use xiv_market_board::domain::model::listing::ItemMarketEntry;
use xiv_market_board::domain::traits::{CatalogueSource, ItemMetadataSource, ItemSearch, MarketDataSource};
use xiv_market_board::infrastructure::item_data::xivapi::parsers::XivApiParser;
use xiv_market_board::infrastructure::market_data::universalis::parsers::UniversalisParser;
use xiv_market_board::market_board::render::{render_json, render_table};
use xiv_market_board::market_board::{MarketBrowser, MarketServices};

// Serves canned JSON bodies through the real parsers
struct CannedBodies {
    marketable: Value,
    search: Value,
    metadata: Value,
    market: Value,
}

#[async_trait]
impl CatalogueSource for CannedBodies {
    async fn marketable_items(&self) -> Result<Vec<u32>> {
        UniversalisParser::parse_marketable(&self.marketable)
    }
}

#[async_trait]
impl ItemSearch for CannedBodies {
    async fn search_items(&self, _query: &str) -> Result<Vec<u32>> {
        XivApiParser::parse_search_ids(&self.search)
    }
}

#[async_trait]
impl ItemMetadataSource for CannedBodies {
    async fn item_metadata(&self, item_ids: &[u32]) -> Result<Vec<ItemMeta>> {
        let items = XivApiParser::parse_item_metadata(&self.metadata)?;
        Ok(items.into_iter().filter(|i| item_ids.contains(&i.id)).collect())
    }
}

#[async_trait]
impl MarketDataSource for CannedBodies {
    async fn market_entries(&self, _scope: &MarketScope, _item_ids: &[u32]) -> Result<Vec<ItemMarketEntry>> {
        Ok(UniversalisParser::parse_market_response(self.market.clone()))
    }
}

fn canned() -> Arc<CannedBodies> {
    Arc::new(CannedBodies {
        marketable: json!([2, 3, 5057]),
        search: json!({ "Results": [ { "ID": 5057 }, { "ID": 1 } ] }),
        metadata: json!({ "Results": [
            { "ID": 2, "Name": "Fire Shard", "Icon": "/i/020000/020001.png" },
            { "ID": 3, "Name": "Ice Shard" },
            { "ID": 5057, "Name": "Dark Matter" }
        ] }),
        market: json!({
            "items": {
                "2": { "itemID": 2, "lastUploadTime": 1700000000000i64, "listings": [
                    { "pricePerUnit": 1500, "hq": false, "worldName": "Tonberry" },
                    { "pricePerUnit": 1200, "hq": false, "worldName": "Ifrit" }
                ] },
                "5057": { "itemID": 5057, "listings": [
                    { "pricePerUnit": 9000, "hq": true, "worldName": "Garuda" }
                ] }
            }
        }),
    })
}

fn services(bodies: Arc<CannedBodies>) -> MarketServices {
    MarketServices {
        catalogue: bodies.clone(),
        market: bodies.clone(),
        search: bodies.clone(),
        metadata: bodies,
    }
}

#[tokio::test]
async fn test_browse_renders_prices_from_upstream_bodies() -> Result<()> {
    let mut browser = MarketBrowser::new(services(canned()), &AppConfig::default(), None)?;
    browser.load_catalogue().await;
    browser.set_scope(MarketScope::from_str("Gaia")?);

    let view = browser.load_page().await;
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0].prices.nq_price, 1200.0);
    assert_eq!(view.rows[0].prices.nq_world, "Ifrit");
    assert_eq!(view.rows[0].icon_url, "https://xivapi.com/i/020000/020001.png");
    assert_eq!(view.rows[2].prices.hq_price, 9000.0);

    let table = render_table(&view);
    assert!(table.contains("1,200 (Ifrit)"));
    assert!(table.contains("9,000 (Garuda)"));
    assert!(table.contains("2023-11-14 22:13"));
    assert!(table.contains("Gaia (data center)"));

    let json: Value = serde_json::from_str(&render_json(&view)?)?;
    assert_eq!(json["scope"], "Gaia");
    assert_eq!(json["rows"][1]["prices"]["min_price"], 0.0);
    assert_eq!(json["rows"][1]["prices"]["min_world"], "");
    Ok(())
}

#[tokio::test]
async fn test_search_keeps_only_tradeable_results() -> Result<()> {
    let mut browser = MarketBrowser::new(services(canned()), &AppConfig::default(), None)?;
    browser.load_catalogue().await;

    assert_eq!(browser.search("dark").await, 1);
    let view = browser.load_page().await;

    assert_eq!(view.query.as_deref(), Some("dark"));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].item.name, "Dark Matter");
    assert!(render_table(&view).starts_with("Search \"dark\""));
    Ok(())
}
