pub mod table;

pub use table::TranslationTable;
