pub mod client;
pub mod parsers;

pub use client::XivApiClient;
pub use parsers::XivApiParser;
