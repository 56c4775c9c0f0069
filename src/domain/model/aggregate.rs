use serde::Serialize;

/// A minimum price and the world it was listed on
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub price: f64,
    pub world: String,
}

/// Cheapest prices for one item, recomputed on every fetch.
///
/// Each minimum is `None` until a qualifying listing is seen. `cheapest`
/// covers every listing, so it never exceeds `cheapest_nq` or `cheapest_hq`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceAggregate {
    pub item_id: u32,
    pub cheapest: Option<PricePoint>,
    pub cheapest_nq: Option<PricePoint>,
    pub cheapest_hq: Option<PricePoint>,
    /// Length of the listing sequence, including listings with unusable prices
    pub listing_count: usize,
    pub last_upload_time: Option<i64>,
}

impl PriceAggregate {
    pub fn empty(item_id: u32) -> Self {
        Self {
            item_id,
            cheapest: None,
            cheapest_nq: None,
            cheapest_hq: None,
            listing_count: 0,
            last_upload_time: None,
        }
    }

    pub fn has_prices(&self) -> bool {
        self.cheapest.is_some()
    }

    /// Flatten to the display form where 0 and "" mean "no listing"
    pub fn summary(&self) -> PriceSummary {
        fn split(point: &Option<PricePoint>) -> (f64, String) {
            point
                .as_ref()
                .map(|p| (p.price, p.world.clone()))
                .unwrap_or((0.0, String::new()))
        }

        let (min_price, min_world) = split(&self.cheapest);
        let (nq_price, nq_world) = split(&self.cheapest_nq);
        let (hq_price, hq_world) = split(&self.cheapest_hq);

        PriceSummary {
            item_id: self.item_id,
            min_price,
            min_world,
            nq_price,
            nq_world,
            hq_price,
            hq_world,
            listing_count: self.listing_count,
            last_upload_time: self.last_upload_time,
        }
    }
}

/// Presentation form of a [`PriceAggregate`]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceSummary {
    pub item_id: u32,
    pub min_price: f64,
    pub min_world: String,
    pub nq_price: f64,
    pub nq_world: String,
    pub hq_price: f64,
    pub hq_world: String,
    pub listing_count: usize,
    pub last_upload_time: Option<i64>,
}
