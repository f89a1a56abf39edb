use std::cmp::Ordering;

use crate::domain::{Listing, PriceCategory};

/// Buckets every row into an equal-population price quartile. Rank-based:
/// the cheapest quarter of rows lands in Q1 and the most expensive in Q4,
/// so bucket boundaries sit at the 25th/50th/75th price percentiles and
/// group sizes differ by at most one row.
pub fn assign_price_categories(rows: &mut [Listing]) {
    let population = rows.len();
    if population == 0 {
        return;
    }

    let mut order: Vec<usize> = (0..population).collect();
    order.sort_by(|&a, &b| {
        rows[a]
            .price
            .partial_cmp(&rows[b].price)
            .unwrap_or(Ordering::Equal)
    });

    for (rank, &row) in order.iter().enumerate() {
        rows[row].price_category = Some(bucket_for_rank(rank, population));
    }
}

fn bucket_for_rank(rank: usize, population: usize) -> PriceCategory {
    match rank * 4 / population {
        0 => PriceCategory::Q1,
        1 => PriceCategory::Q2,
        2 => PriceCategory::Q3,
        _ => PriceCategory::Q4,
    }
}
