pub mod normalize;

mod listings;
mod row;

pub use listings::extract_listings;
pub use row::ListingRow;
