use anyhow::Result;
use std::fs;
use xiv_market_board::domain::model::item::ItemMeta;
use xiv_market_board::infrastructure::translation::TranslationTable;

#[test]
fn test_from_json_str_skips_malformed_entries() -> Result<()> {
    let table = TranslationTable::from_json_str(
        r#"{ "2": "火のシャード", "3": 42, "abc": "ignored", "4": "" , " 5 ": "土のシャード" }"#,
    )?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(2), Some("火のシャード"));
    assert_eq!(table.get(5), Some("土のシャード"));
    assert_eq!(table.get(3), None);
    Ok(())
}

#[test]
fn test_non_object_table_is_rejected() {
    assert!(TranslationTable::from_json_str("[1, 2]").is_err());
    assert!(TranslationTable::from_json_str("{ broken").is_err());
}

#[test]
fn test_overlay_replaces_only_known_names() -> Result<()> {
    let table = TranslationTable::from_json_str(r#"{ "2": "火のシャード" }"#)?;
    let mut items = vec![ItemMeta::new(2, "Fire Shard"), ItemMeta::new(3, "Ice Shard")];

    table.overlay(&mut items);
    assert_eq!(items[0].name, "火のシャード");
    assert_eq!(items[1].name, "Ice Shard");
    Ok(())
}

#[test]
fn test_from_file() -> Result<()> {
    let path = std::env::temp_dir().join(format!("xiv_market_board_names_{}.json", std::process::id()));
    fs::write(&path, r#"{ "5057": "ダークマター" }"#)?;

    let table = TranslationTable::from_file(&path);
    fs::remove_file(&path)?;

    assert_eq!(table?.get(5057), Some("ダークマター"));
    assert!(TranslationTable::from_file("/nonexistent/names.json").is_err());
    Ok(())
}
