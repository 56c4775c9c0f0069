//! Market board browsing
//!
//! Reduces market listings to per-item minimum prices, pages through the
//! tradeable catalogue, debounces search input and renders the price table.

pub mod browser;
pub mod paginator;
pub mod reducer;
pub mod render;
pub mod search;


// Re-export core components
pub use browser::{MarketBrowser, MarketServices, PageRow, PageView};
pub use paginator::Paginator;
pub use reducer::aggregate;
pub use search::{debounce_queries, filter_tradeable, SessionInput};
