use serde_json::json;
use xiv_market_board::domain::model::listing::{ItemMarketEntry, Listing};
use xiv_market_board::infrastructure::market_data::universalis::parsers::UniversalisParser;
use xiv_market_board::market_board::reducer::aggregate;

#[test]
fn test_entry_without_listings_has_no_minima() {
    let result = aggregate(&[ItemMarketEntry::new(10, vec![])]);
    let summary = result[&10].summary();

    assert_eq!(summary.min_price, 0.0);
    assert_eq!(summary.nq_price, 0.0);
    assert_eq!(summary.hq_price, 0.0);
    assert_eq!(summary.min_world, "");
    assert_eq!(summary.nq_world, "");
    assert_eq!(summary.hq_world, "");
    assert_eq!(summary.listing_count, 0);
}

#[test]
fn test_invalid_prices_count_but_set_no_minimum() {
    let entries = UniversalisParser::parse_market_response(json!({
        "itemID": 11,
        "listings": [
            { "pricePerUnit": 0, "hq": false, "worldName": "A" },
            { "pricePerUnit": "n/a", "hq": true, "worldName": "B" },
            { "hq": false, "worldName": "C" }
        ]
    }));

    let aggregate = &aggregate(&entries)[&11];
    assert_eq!(aggregate.listing_count, 3);
    assert!(aggregate.cheapest.is_none());
    assert!(aggregate.cheapest_nq.is_none());
    assert!(aggregate.cheapest_hq.is_none());
}

#[test]
fn test_malformed_listing_does_not_hide_valid_ones() {
    let entry = ItemMarketEntry {
        item_id: Some(12),
        listings: vec![
            Listing { price_per_unit: None, hq: false, world_name: "A".to_string() },
            Listing::new(f64::NAN, false, "B"),
            Listing::new(300.0, false, "C"),
        ],
        last_upload_time: Some(42),
    };

    let aggregate = &aggregate(&[entry])[&12];
    assert_eq!(aggregate.listing_count, 3);
    assert_eq!(aggregate.cheapest_nq.as_ref().unwrap().world, "C");
    assert_eq!(aggregate.last_upload_time, Some(42));
}

#[test]
fn test_tie_break_first_seen_wins() {
    let entry = ItemMarketEntry::new(
        13,
        vec![Listing::new(100.0, false, "A"), Listing::new(100.0, false, "B")],
    );

    let summary = aggregate(&[entry])[&13].summary();
    assert_eq!(summary.nq_price, 100.0);
    assert_eq!(summary.nq_world, "A");
    assert_eq!(summary.min_world, "A");
}

#[test]
fn test_quality_separation() {
    let entry = ItemMarketEntry::new(
        14,
        vec![Listing::new(50.0, true, "X"), Listing::new(80.0, false, "Y")],
    );

    let summary = aggregate(&[entry])[&14].summary();
    assert_eq!((summary.nq_price, summary.nq_world.as_str()), (80.0, "Y"));
    assert_eq!((summary.hq_price, summary.hq_world.as_str()), (50.0, "X"));
    assert_eq!((summary.min_price, summary.min_world.as_str()), (50.0, "X"));
}

#[test]
fn test_overall_never_exceeds_quality_minima() {
    let worlds = ["Alpha", "Beta", "Gamma", "Delta"];
    let entries: Vec<ItemMarketEntry> = (0..40u32)
        .map(|id| {
            let listings = (0..20u32)
                .map(|i| {
                    // deterministic spread of prices, qualities and some zeros
                    let price = ((id * 37 + i * 91) % 500) as f64;
                    Listing::new(price, (id + i) % 3 == 0, worlds[(i % 4) as usize])
                })
                .collect();
            ItemMarketEntry::new(id, listings)
        })
        .collect();

    for aggregate in aggregate(&entries).values() {
        let overall = aggregate.cheapest.as_ref().map(|p| p.price);
        for quality in [&aggregate.cheapest_nq, &aggregate.cheapest_hq] {
            if let (Some(overall), Some(point)) = (overall, quality) {
                assert!(overall <= point.price, "item {}", aggregate.item_id);
            }
        }
        // the overall minimum is one of the two quality minima
        let min_quality = [&aggregate.cheapest_nq, &aggregate.cheapest_hq]
            .iter()
            .filter_map(|p| p.as_ref().map(|p| p.price))
            .fold(f64::INFINITY, f64::min);
        if let Some(overall) = overall {
            assert_eq!(overall, min_quality);
        }
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let entries = vec![
        ItemMarketEntry::new(1, vec![Listing::new(10.0, true, "A"), Listing::new(7.0, false, "B")]),
        ItemMarketEntry::new(2, vec![Listing::new(3.0, false, "C")]),
    ];

    assert_eq!(aggregate(&entries), aggregate(&entries));
}
