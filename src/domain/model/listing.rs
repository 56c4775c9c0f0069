use serde::Serialize;

/// One seller's posted offer, as read from the market-data service.
///
/// `price_per_unit` is `None` when the upstream value was not a finite number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Listing {
    pub price_per_unit: Option<f64>,
    pub hq: bool,
    pub world_name: String,
}

impl Listing {
    pub fn new(price_per_unit: f64, hq: bool, world_name: &str) -> Self {
        Self {
            price_per_unit: Some(price_per_unit),
            hq,
            world_name: world_name.to_string(),
        }
    }

    /// Price usable for a minimum: finite and non-zero
    pub fn valid_price(&self) -> Option<f64> {
        self.price_per_unit.filter(|p| p.is_finite() && *p != 0.0)
    }
}

/// Market data for one item, one per requested identifier per fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemMarketEntry {
    /// `None` when the identifier was missing or not a finite integer
    pub item_id: Option<u32>,
    /// Listings in the order the service returned them
    pub listings: Vec<Listing>,
    pub last_upload_time: Option<i64>,
}

impl ItemMarketEntry {
    pub fn new(item_id: u32, listings: Vec<Listing>) -> Self {
        Self {
            item_id: Some(item_id),
            listings,
            last_upload_time: None,
        }
    }

    /// Keep at most `cap` listings, preserving order
    pub fn truncate_listings(&mut self, cap: usize) {
        self.listings.truncate(cap);
    }
}
