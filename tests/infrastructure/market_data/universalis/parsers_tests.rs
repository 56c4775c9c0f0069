use anyhow::Result;
use serde_json::json;
use xiv_market_board::infrastructure::market_data::universalis::models::MarketResponse;
use xiv_market_board::infrastructure::market_data::universalis::parsers::UniversalisParser;

#[test]
fn test_keyed_response_yields_one_entry_per_item() {
    let body = json!({
        "itemIDs": [100, 200],
        "items": {
            "100": {
                "itemID": 100,
                "lastUploadTime": 1700000000000i64,
                "listings": [
                    { "pricePerUnit": 500, "hq": false, "worldName": "Tonberry" }
                ]
            },
            "200": {
                "itemID": 200,
                "listings": []
            }
        },
        "unresolvedItems": []
    });

    let mut entries = UniversalisParser::parse_market_response(body);
    entries.sort_by_key(|e| e.item_id);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].item_id, Some(100));
    assert_eq!(entries[0].last_upload_time, Some(1700000000000));
    assert_eq!(entries[0].listings.len(), 1);
    assert_eq!(entries[0].listings[0].price_per_unit, Some(500.0));
    assert_eq!(entries[0].listings[0].world_name, "Tonberry");
    assert_eq!(entries[1].item_id, Some(200));
    assert!(entries[1].listings.is_empty());
}

#[test]
fn test_bare_entry_yields_single_entry() {
    let body = json!({
        "itemID": 5057,
        "worldName": "Tonberry",
        "listings": [
            { "pricePerUnit": 80, "hq": true },
            { "pricePerUnit": "95", "hq": 0, "worldName": "Typhon" }
        ]
    });

    let entries = UniversalisParser::parse_market_response(body);
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.item_id, Some(5057));
    assert!(entry.listings[0].hq);
    // single-world responses leave the per-listing world out
    assert_eq!(entry.listings[0].world_name, "");
    assert_eq!(entry.listings[1].price_per_unit, Some(95.0));
    assert!(!entry.listings[1].hq);
}

#[test]
fn test_sequence_shapes() {
    let nested = json!({ "items": [ { "itemID": 1 }, { "itemID": 2 }, { "itemID": 3 } ] });
    assert_eq!(UniversalisParser::parse_market_response(nested).len(), 3);

    let top_level = json!([ { "itemID": 1, "listings": [] } ]);
    assert_eq!(UniversalisParser::parse_market_response(top_level).len(), 1);
}

#[test]
fn test_unknown_shapes_yield_nothing() {
    for body in [
        json!(null),
        json!({}),
        json!({ "items": null }),
        json!({ "items": 42, "message": "oops" }),
        json!("not json"),
        json!(17),
    ] {
        assert!(UniversalisParser::parse_market_response(body.clone()).is_empty(), "{}", body);
    }
}

#[test]
fn test_shape_detection() {
    assert_eq!(MarketResponse::from_value(json!({ "items": {} })).shape(), "keyed");
    assert_eq!(MarketResponse::from_value(json!({ "items": [] })).shape(), "sequence");
    assert_eq!(MarketResponse::from_value(json!({ "listings": [] })).shape(), "single");
    assert_eq!(MarketResponse::from_value(json!({ "items": null })).shape(), "empty");
}

#[test]
fn test_malformed_fields_are_kept_as_absent() {
    let entry = UniversalisParser::parse_entry(&json!({
        "itemID": "not-a-number",
        "lastUploadTime": "yesterday",
        "listings": [
            { "pricePerUnit": "abc", "hq": "yes" },
            "garbage",
            { "pricePerUnit": null }
        ]
    }));

    assert_eq!(entry.item_id, None);
    assert_eq!(entry.last_upload_time, None);
    assert_eq!(entry.listings.len(), 3);
    assert!(entry.listings.iter().all(|l| l.price_per_unit.is_none() && !l.hq));

    // timestamps are kept verbatim or not at all
    for bad in [json!(1.7), json!(-5.9), json!(1e30)] {
        let entry = UniversalisParser::parse_entry(&json!({ "itemID": 1, "lastUploadTime": bad }));
        assert_eq!(entry.item_id, Some(1));
        assert_eq!(entry.last_upload_time, None);
    }
}

#[test]
fn test_parse_marketable() -> Result<()> {
    let ids = UniversalisParser::parse_marketable(&json!([2, 3, "4", -1, 5.5]))?;
    assert_eq!(ids, vec![2, 3, 4]);

    assert!(UniversalisParser::parse_marketable(&json!({ "error": "down" })).is_err());
    Ok(())
}
