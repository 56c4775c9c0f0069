// Defaults for the upstream services and the page view.
// Each one can be overridden from config.toml.
pub const DEFAULT_MARKET_BASE_URL: &str = "https://universalis.app/api/v2";
pub const DEFAULT_ITEM_DATA_BASE_URL: &str = "https://xivapi.com";
pub const DEFAULT_USER_AGENT: &str = "xiv_market_board/0.1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const DEFAULT_SCOPE: &str = "Japan";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_LISTINGS_PER_ITEM: usize = 20;
// Single-item responses are bare entries, multi-item responses nest them under `items`.
pub const DEFAULT_MARKET_FIELDS: &str = "itemID,lastUploadTime,listings.pricePerUnit,listings.hq,listings.worldName,\
items.itemID,items.lastUploadTime,items.listings.pricePerUnit,items.listings.hq,items.listings.worldName";

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

pub const DEFAULT_PLACEHOLDER_ICON: &str = "/i/000000/000405.png";
pub const PAGE_WINDOW_RADIUS: usize = 2;
