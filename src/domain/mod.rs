pub mod filter;
pub mod listing;

pub use filter::{FieldKind, FilterField, FilterState, PropertyType};
pub use listing::{ImageGateway, ListingRecord};
