pub mod error;
pub mod http;
pub mod item_data;
pub mod market_data;
pub mod translation;
