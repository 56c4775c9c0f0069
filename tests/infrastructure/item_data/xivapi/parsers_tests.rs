use anyhow::Result;
use serde_json::json;
use xiv_market_board::infrastructure::item_data::xivapi::parsers::XivApiParser;

#[test]
fn test_parse_search_ids() -> Result<()> {
    let body = json!({
        "Pagination": { "Page": 1, "Results": 3 },
        "Results": [ { "ID": 5057 }, { "ID": "5058" }, { "Name": "no id" } ]
    });

    assert_eq!(XivApiParser::parse_search_ids(&body)?, vec![5057, 5058]);
    Ok(())
}

#[test]
fn test_search_without_results_is_empty() -> Result<()> {
    assert!(XivApiParser::parse_search_ids(&json!({ "Pagination": {} }))?.is_empty());
    assert!(XivApiParser::parse_search_ids(&json!({ "Results": null }))?.is_empty());
    assert!(XivApiParser::parse_search_ids(&json!({ "Results": "nope" })).is_err());
    Ok(())
}

#[test]
fn test_parse_item_metadata() -> Result<()> {
    let body = json!({
        "Results": [
            { "ID": 2, "Name": "Fire Shard", "Icon": "/i/020000/020001.png" },
            { "ID": 3, "Name": "Ice Shard", "Icon": "" },
            { "Name": "orphan" }
        ]
    });

    let items = XivApiParser::parse_item_metadata(&body)?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Fire Shard");
    assert_eq!(items[0].icon.as_deref(), Some("/i/020000/020001.png"));
    assert_eq!(items[1].icon, None);
    Ok(())
}
