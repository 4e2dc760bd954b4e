pub mod filter;
pub mod catalog;

pub use filter::matches_filter;
pub use catalog::FlightCatalog;
