// Shapes of Universalis market-data responses
use serde_json::{Map, Value};

/// A market-data response, resolved once at the service boundary.
///
/// The service nests entries under `items` when several identifiers are
/// requested and returns a bare entry for a single identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketResponse {
    /// `items` is an object keyed by item id
    Keyed(Map<String, Value>),
    /// `items` (or the whole body) is an array of entries
    Sequence(Vec<Value>),
    /// The body is one entry, recognised by `itemID` or `listings`
    Single(Value),
    /// Nothing recognisable, which is not an error
    Empty,
}

impl MarketResponse {
    pub fn from_value(data: Value) -> Self {
        match data {
            Value::Array(entries) => MarketResponse::Sequence(entries),
            Value::Object(mut body) => match body.remove("items") {
                Some(Value::Object(items)) => MarketResponse::Keyed(items),
                Some(Value::Array(items)) => MarketResponse::Sequence(items),
                _ if body.contains_key("itemID") || body.contains_key("listings") => {
                    MarketResponse::Single(Value::Object(body))
                }
                _ => MarketResponse::Empty,
            },
            _ => MarketResponse::Empty,
        }
    }

    /// Entry objects in response order
    pub fn into_entry_values(self) -> Vec<Value> {
        match self {
            MarketResponse::Keyed(items) => items.into_iter().map(|(_, entry)| entry).collect(),
            MarketResponse::Sequence(items) => items,
            MarketResponse::Single(entry) => vec![entry],
            MarketResponse::Empty => Vec::new(),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            MarketResponse::Keyed(_) => "keyed",
            MarketResponse::Sequence(_) => "sequence",
            MarketResponse::Single(_) => "single",
            MarketResponse::Empty => "empty",
        }
    }
}
