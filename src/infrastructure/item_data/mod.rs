pub mod xivapi;
