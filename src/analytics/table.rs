use itertools::Itertools;

use crate::analytics::assign_price_categories;
use crate::domain::Listing;

/// The read-only table the dashboard serves. Built once at startup; the
/// price-quartile derivation runs here, so every served row is categorized.
pub struct ListingTable {
    rows: Vec<Listing>,
    categories: Vec<String>,
}

impl ListingTable {
    pub fn from_rows(mut rows: Vec<Listing>) -> Self {
        assign_price_categories(&mut rows);
        let categories = rows
            .iter()
            .map(|row| row.category.clone())
            .unique()
            .sorted()
            .collect();
        ListingTable { rows, categories }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    /// Distinct search categories, alphabetical; feeds the Trends selector.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
