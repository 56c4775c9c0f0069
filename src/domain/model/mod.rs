pub mod aggregate;
pub mod item;
pub mod listing;
