// Standard library imports
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use log::{debug, error, info, warn};
use serde::Serialize;

// Internal crate imports
use crate::config_loader::AppConfig;
use crate::domain::enums::MarketScope;
use crate::domain::model::aggregate::{PriceAggregate, PriceSummary};
use crate::domain::model::item::ItemMeta;
use crate::domain::traits::{CatalogueSource, ItemMetadataSource, ItemSearch, MarketDataSource};
use crate::infrastructure::translation::TranslationTable;

use super::paginator::Paginator;
use super::reducer::aggregate;
use super::search::{filter_tradeable, normalize_query};

/// The upstream collaborators a browser talks to
#[derive(Clone)]
pub struct MarketServices {
    pub catalogue: Arc<dyn CatalogueSource>,
    pub market: Arc<dyn MarketDataSource>,
    pub search: Arc<dyn ItemSearch>,
    pub metadata: Arc<dyn ItemMetadataSource>,
}

/// One line of the price table
#[derive(Debug, Clone, Serialize)]
pub struct PageRow {
    pub item: ItemMeta,
    pub icon_url: String,
    pub prices: PriceSummary,
}

/// Everything shown for one page, rebuilt on every load
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub scope: MarketScope,
    pub query: Option<String>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub rows: Vec<PageRow>,
}

impl PageView {
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.total_items, self.page_size)
    }
}

/// Page-scoped view state over the market board.
///
/// Upstream failures never escape: they are logged and the affected part of
/// the view is left empty. Loads are not fenced, so whichever load finishes
/// last is what the caller ends up showing.
pub struct MarketBrowser {
    services: MarketServices,
    translations: Option<TranslationTable>,

    page_size: usize,
    listings_cap: usize,
    item_data_base_url: String,
    placeholder_icon: String,

    catalogue: Vec<u32>,
    tradeable: HashSet<u32>,
    query: Option<String>,
    results: Vec<u32>,
    page: usize,
    scope: MarketScope,
}

impl MarketBrowser {
    pub fn new(
        services: MarketServices,
        config: &AppConfig,
        translations: Option<TranslationTable>,
    ) -> Result<Self> {
        Ok(Self {
            services,
            translations,
            page_size: config.market.page_size.max(1),
            listings_cap: config.market.listings_per_item,
            item_data_base_url: config.services.item_data_base_url.clone(),
            placeholder_icon: config.app.placeholder_icon.clone(),
            catalogue: Vec::new(),
            tradeable: HashSet::new(),
            query: None,
            results: Vec::new(),
            page: 1,
            scope: config.default_scope()?,
        })
    }

    /// Fetch the tradeable catalogue. On failure the catalogue is empty.
    pub async fn load_catalogue(&mut self) -> usize {
        let ids = match self.services.catalogue.marketable_items().await {
            Ok(ids) => ids,
            Err(e) => {
                error!("Failed to load marketable items: {:#}", e);
                Vec::new()
            }
        };

        self.tradeable = ids.iter().copied().collect();
        self.catalogue = ids;
        self.page = 1;
        info!("Catalogue holds {} tradeable items", self.catalogue.len());
        self.catalogue.len()
    }

    /// Narrow the view to items matching `raw`; blank text shows the whole
    /// catalogue. Always returns to page 1.
    pub async fn search(&mut self, raw: &str) -> usize {
        self.page = 1;

        let Some(query) = normalize_query(raw) else {
            self.query = None;
            self.results.clear();
            return self.catalogue.len();
        };

        let candidates = match self.services.search.search_items(query).await {
            Ok(ids) => ids,
            Err(e) => {
                error!("Search for '{}' failed: {:#}", query, e);
                Vec::new()
            }
        };

        self.results = filter_tradeable(&candidates, &self.tradeable);
        debug!(
            "Search '{}': {} candidates, {} tradeable",
            query,
            candidates.len(),
            self.results.len()
        );
        self.query = Some(query.to_string());
        self.results.len()
    }

    pub fn set_scope(&mut self, scope: MarketScope) {
        if scope != self.scope {
            info!("Scope changed to {}", scope);
        }
        self.scope = scope;
    }

    /// Jump to a page, clamped to the available range
    pub fn set_page(&mut self, page: usize) -> usize {
        let clamped = self.paginator().clamp_page(page);
        if clamped != page {
            warn!("Page {} out of range, showing page {}", page, clamped);
        }
        self.page = clamped;
        clamped
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    /// Previous page; stays on page 1 without a range warning
    pub fn prev_page(&mut self) -> usize {
        if self.page <= 1 {
            return self.page;
        }
        self.set_page(self.page - 1)
    }

    pub fn scope(&self) -> &MarketScope {
        &self.scope
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_tradeable(&self, item_id: u32) -> bool {
        self.tradeable.contains(&item_id)
    }

    /// Ids the current query selects, before paging
    pub fn current_ids(&self) -> &[u32] {
        match self.query {
            Some(_) => &self.results,
            None => &self.catalogue,
        }
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.current_ids().len(), self.page_size)
    }

    /// Fetch names and prices for the current page and join them into rows
    /// in page order. Metadata and market data are requested concurrently.
    pub async fn load_page(&self) -> PageView {
        let paginator = self.paginator();
        let page = paginator.clamp_page(self.page);
        let ids = paginator.slice(self.current_ids(), page).to_vec();

        let mut view = PageView {
            scope: self.scope.clone(),
            query: self.query.clone(),
            page,
            page_size: paginator.page_size(),
            total_items: paginator.total_items(),
            total_pages: paginator.total_pages(),
            rows: Vec::with_capacity(ids.len()),
        };

        if ids.is_empty() {
            debug!("Nothing to load on page {}", page);
            return view;
        }

        let (metadata, entries) = tokio::join!(
            self.services.metadata.item_metadata(&ids),
            self.services.market.market_entries(&self.scope, &ids),
        );

        let metadata = metadata.unwrap_or_else(|e| {
            error!("Failed to load item metadata for page {}: {:#}", page, e);
            Vec::new()
        });

        let mut entries = entries.unwrap_or_else(|e| {
            error!("Failed to load market data for page {} in {}: {:#}", page, self.scope, e);
            Vec::new()
        });

        for entry in entries.iter_mut() {
            entry.truncate_listings(self.listings_cap);
        }
        let aggregates = aggregate(&entries);

        let mut by_id: HashMap<u32, ItemMeta> = metadata.into_iter().map(|m| (m.id, m)).collect();
        let mut items: Vec<ItemMeta> = ids
            .iter()
            .map(|id| by_id.remove(id).unwrap_or_else(|| ItemMeta::new(*id, "")))
            .collect();

        if let Some(translations) = &self.translations {
            translations.overlay(&mut items);
        }

        for mut item in items {
            if item.name.is_empty() {
                item.name = format!("Item #{}", item.id);
            }

            let prices = aggregates
                .get(&item.id)
                .cloned()
                .unwrap_or_else(|| PriceAggregate::empty(item.id))
                .summary();

            view.rows.push(PageRow {
                icon_url: item.icon_url(&self.item_data_base_url, &self.placeholder_icon),
                item,
                prices,
            });
        }

        info!(
            "Loaded page {}/{} ({} items, {} with prices) in {}",
            view.page,
            view.total_pages,
            view.rows.len(),
            aggregates.values().filter(|a| a.has_prices()).count(),
            view.scope
        );

        view
    }
}
