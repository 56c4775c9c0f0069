pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod market_board;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::model::aggregate::*;
pub use domain::model::item::*;
pub use domain::model::listing::*;
pub use infrastructure::item_data::xivapi::{XivApiClient, XivApiParser};
pub use infrastructure::market_data::universalis::{UniversalisClient, UniversalisParser};
pub use infrastructure::translation::TranslationTable;
pub use market_board::*;
