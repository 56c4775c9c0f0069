use anyhow::Result;
use log::{debug, warn};
use serde_json::Value;

use crate::domain::model::listing::{ItemMarketEntry, Listing};
use crate::infrastructure::error::UpstreamError;
use super::models::MarketResponse;

/// Parses JSON bodies from the Universalis API
pub struct UniversalisParser;

impl UniversalisParser {
    /// Normalizes a market-data body of any known shape into entries.
    ///
    /// Unknown or absent shapes give an empty list.
    pub fn parse_market_response(data: Value) -> Vec<ItemMarketEntry> {
        let response = MarketResponse::from_value(data);
        debug!("Market response shape: {}", response.shape());

        response
            .into_entry_values()
            .iter()
            .map(Self::parse_entry)
            .collect()
    }

    /// Parses one entry object. Malformed fields become `None` or defaults.
    pub fn parse_entry(data: &Value) -> ItemMarketEntry {
        let listings = match data.get("listings") {
            Some(Value::Array(listings)) => listings.iter().map(Self::parse_listing).collect(),
            _ => Vec::new(),
        };

        ItemMarketEntry {
            item_id: data.get("itemID").and_then(coerce_item_id),
            listings,
            last_upload_time: data.get("lastUploadTime").and_then(coerce_integer),
        }
    }

    /// Parses one listing. Non-object listings still count as listings.
    pub fn parse_listing(data: &Value) -> Listing {
        Listing {
            price_per_unit: data.get("pricePerUnit").and_then(coerce_number),
            hq: data.get("hq").map(coerce_flag).unwrap_or(false),
            world_name: data
                .get("worldName")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Parses the marketable-items catalogue, a JSON array of ids
    pub fn parse_marketable(data: &Value) -> Result<Vec<u32>> {
        let ids = data.as_array().ok_or_else(|| UpstreamError::InvalidBody {
            service: "universalis",
            reason: "marketable items is not an array".to_string(),
        })?;

        let parsed: Vec<u32> = ids.iter().filter_map(coerce_item_id).collect();
        if parsed.len() != ids.len() {
            warn!(
                "Dropped {} malformed ids from the marketable catalogue",
                ids.len() - parsed.len()
            );
        }

        Ok(parsed)
    }
}

/// Numbers and numeric strings, when finite
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Finite, integral, non-negative numbers that fit an item id
pub fn coerce_item_id(value: &Value) -> Option<u32> {
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

/// Integral numbers that fit `i64`, kept exact when the JSON number is already an integer
pub fn coerce_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
        .map(|n| n as i64)
}

/// Truthiness of an `hq` flag: booleans, non-zero numbers, "true" / "1".
/// Any other string, including "yes" or "false", is false.
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    }
}
