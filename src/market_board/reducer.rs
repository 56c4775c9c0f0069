use std::collections::BTreeMap;

use crate::domain::model::aggregate::{PriceAggregate, PricePoint};
use crate::domain::model::listing::ItemMarketEntry;

/// Reduce market entries to the cheapest overall, NQ and HQ price per item.
///
/// Entries without a usable identifier are skipped. Listings whose price is
/// zero or not finite count towards `listing_count` but never set a minimum.
/// On equal prices the first listing seen keeps the minimum, so the input
/// order decides provenance. A repeated identifier replaces the earlier one.
pub fn aggregate(entries: &[ItemMarketEntry]) -> BTreeMap<u32, PriceAggregate> {
    let mut result = BTreeMap::new();

    for entry in entries {
        let Some(item_id) = entry.item_id else {
            continue;
        };
        result.insert(item_id, aggregate_entry(item_id, entry));
    }

    result
}

fn aggregate_entry(item_id: u32, entry: &ItemMarketEntry) -> PriceAggregate {
    let mut cheapest: Option<PricePoint> = None;
    let mut cheapest_nq: Option<PricePoint> = None;
    let mut cheapest_hq: Option<PricePoint> = None;

    for listing in &entry.listings {
        let Some(price) = listing.valid_price() else {
            continue;
        };

        lower(&mut cheapest, price, &listing.world_name);
        if listing.hq {
            lower(&mut cheapest_hq, price, &listing.world_name);
        } else {
            lower(&mut cheapest_nq, price, &listing.world_name);
        }
    }

    PriceAggregate {
        item_id,
        cheapest,
        cheapest_nq,
        cheapest_hq,
        listing_count: entry.listings.len(),
        last_upload_time: entry.last_upload_time,
    }
}

// strictly lower only: ties keep the earlier listing
fn lower(current: &mut Option<PricePoint>, price: f64, world: &str) {
    if current.as_ref().map_or(true, |p| price < p.price) {
        *current = Some(PricePoint {
            price,
            world: world.to_string(),
        });
    }
}
