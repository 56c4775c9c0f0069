use anyhow::Result;
use serde_json::Value;

use crate::domain::model::item::ItemMeta;
use crate::infrastructure::error::UpstreamError;
use crate::infrastructure::market_data::universalis::parsers::coerce_item_id;

/// Parses JSON bodies from the XIVAPI item-data API
pub struct XivApiParser;

impl XivApiParser {
    fn results(data: &Value) -> Result<&[Value]> {
        match data.get("Results") {
            Some(Value::Array(results)) => Ok(results.as_slice()),
            // A search with no hits may omit the array entirely
            None | Some(Value::Null) => Ok(&[]),
            Some(_) => Err(UpstreamError::InvalidBody {
                service: "xivapi",
                reason: "`Results` is not an array".to_string(),
            }
            .into()),
        }
    }

    /// Item ids from a search response, in result order
    pub fn parse_search_ids(data: &Value) -> Result<Vec<u32>> {
        Ok(Self::results(data)?
            .iter()
            .filter_map(|row| row.get("ID").and_then(coerce_item_id))
            .collect())
    }

    /// Name and icon rows from an item lookup. Rows without an id are dropped.
    pub fn parse_item_metadata(data: &Value) -> Result<Vec<ItemMeta>> {
        Ok(Self::results(data)?
            .iter()
            .filter_map(|row| {
                let id = row.get("ID").and_then(coerce_item_id)?;
                Some(ItemMeta {
                    id,
                    name: row
                        .get("Name")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    icon: row
                        .get("Icon")
                        .and_then(|v| v.as_str())
                        .filter(|icon| !icon.is_empty())
                        .map(|icon| icon.to_string()),
                })
            })
            .collect())
    }
}
