pub mod client;
pub mod models;
pub mod parsers;

pub use client::UniversalisClient;
pub use parsers::UniversalisParser;
