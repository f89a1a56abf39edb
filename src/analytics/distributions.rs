use itertools::Itertools;

use crate::domain::{Listing, PriceCategory};

/// Row counts per search category, alphabetical.
pub fn category_counts<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> Vec<(String, usize)> {
    rows.into_iter()
        .map(|row| row.category.clone())
        .counts()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

/// Row counts per price quartile, Q1..Q4, zero-filled so the chart always
/// shows four bars.
pub fn price_category_counts<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
) -> Vec<(PriceCategory, usize)> {
    let counts = rows
        .into_iter()
        .filter_map(|row| row.price_category)
        .counts();
    PriceCategory::ALL
        .into_iter()
        .map(|bucket| (bucket, counts.get(&bucket).copied().unwrap_or(0)))
        .collect()
}

/// Numeric values grouped by search category, alphabetical. Rows where the
/// accessor yields nothing (a missing rating) are left out of their group.
pub fn series_by_category<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
    value: impl Fn(&Listing) -> Option<f64>,
) -> Vec<(String, Vec<f64>)> {
    rows.into_iter()
        .filter_map(|row| value(row).map(|v| (row.category.clone(), v)))
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

/// (x, y) point series grouped by search category for scatter traces. A row
/// missing either coordinate is dropped from its series.
pub fn pairs_by_category<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
    x: impl Fn(&Listing) -> Option<f64>,
    y: impl Fn(&Listing) -> Option<f64>,
) -> Vec<(String, Vec<f64>, Vec<f64>)> {
    rows.into_iter()
        .filter_map(|row| match (x(row), y(row)) {
            (Some(x), Some(y)) => Some((row.category.clone(), (x, y))),
            _ => None,
        })
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .map(|(category, points)| {
            let (xs, ys) = points.into_iter().unzip();
            (category, xs, ys)
        })
        .collect()
}

/// Rating samples per price quartile, Q1..Q4, for the Trends box plot.
pub fn ratings_by_quartile<'a>(
    rows: impl IntoIterator<Item = &'a Listing>,
) -> Vec<(PriceCategory, Vec<f64>)> {
    let grouped = rows
        .into_iter()
        .filter_map(|row| row.price_category.zip(row.rating))
        .into_group_map();
    PriceCategory::ALL
        .into_iter()
        .map(|bucket| (bucket, grouped.get(&bucket).cloned().unwrap_or_default()))
        .collect()
}

/// Pearson correlation matrix over (price, rating, reviews), pairwise
/// complete: a row with a missing rating still contributes to the
/// price/reviews cell. Degenerate pairs (constant series, fewer than two
/// observations) report 0.
pub fn correlation_matrix<'a>(
    rows: impl IntoIterator<Item = &'a Listing> + Clone,
) -> [[f64; 3]; 3] {
    let columns: [&dyn Fn(&Listing) -> Option<f64>; 3] = [
        &|row: &Listing| Some(row.price),
        &|row: &Listing| row.rating,
        &|row: &Listing| Some(row.reviews as f64),
    ];

    let mut matrix = [[0.0; 3]; 3];
    for (i, col_a) in columns.iter().enumerate() {
        for (j, col_b) in columns.iter().enumerate() {
            let pairs: Vec<(f64, f64)> = rows
                .clone()
                .into_iter()
                .filter_map(|row| col_a(row).zip(col_b(row)))
                .collect();
            matrix[i][j] = pearson(&pairs);
        }
    }
    matrix
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return 0.0;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    covariance / denominator
}
