use std::collections::HashSet;

use itertools::Itertools;

use crate::domain::{Listing, PriceCategory};

/// State of the two Trends-page selectors. A row survives the filter iff its
/// category is in the selected category set AND its quartile is in the
/// selected quartile set, so selecting every option yields the full table.
#[derive(Debug, Clone)]
pub struct TrendsFilter {
    pub categories: HashSet<String>,
    pub quartiles: HashSet<PriceCategory>,
}

impl TrendsFilter {
    pub fn keeps(&self, row: &Listing) -> bool {
        self.categories.contains(&row.category)
            && row
                .price_category
                .map_or(false, |bucket| self.quartiles.contains(&bucket))
    }
}

pub fn filter_rows<'a>(rows: &'a [Listing], filter: &TrendsFilter) -> Vec<&'a Listing> {
    rows.iter().filter(|row| filter.keeps(row)).collect()
}

/// Mean price per search category, alphabetical, for the Trends bar chart.
pub fn mean_price_by_category<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
) -> Vec<(String, f64)> {
    rows.into_iter()
        .map(|row| (row.category.clone(), row.price))
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .map(|(category, prices)| {
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            (category, mean)
        })
        .collect()
}
