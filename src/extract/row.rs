/// One listing flattened to the six output columns, in column order.
///
/// Numeric fields hold either bare digits or the `N/A` sentinel; the
/// neighborhood is free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub download_date: String,
    pub neighborhood: String,
    pub price: String,
    pub num_rooms: String,
    pub num_bathrooms: String,
    pub area_m2: String,
}

impl ListingRow {
    /// Column values in serialization order.
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.download_date,
            &self.neighborhood,
            &self.price,
            &self.num_rooms,
            &self.num_bathrooms,
            &self.area_m2,
        ]
    }
}
