use std::collections::HashSet;

use actix_web::{get, web, HttpResponse};
use askama::Template;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analytics::{
    filter_rows, mean_price_by_category, pairs_by_category, ratings_by_quartile, ListingTable,
    TrendsFilter,
};
use crate::domain::PriceCategory;
use crate::routes::figures;

#[derive(Template)]
#[template(path = "trends.html")]
struct TrendsTemplate {
    categories: Vec<String>,
}

#[get("/trends")]
async fn trends(table: web::Data<ListingTable>) -> HttpResponse {
    HttpResponse::Ok().body(
        TrendsTemplate {
            categories: table.categories().to_vec(),
        }
        .render()
        .unwrap(),
    )
}

/// Comma-separated selector state. An absent parameter means "everything
/// selected" (the page's initial state); a present-but-empty one means an
/// empty selection.
#[derive(Deserialize)]
struct TrendsQuery {
    categories: Option<String>,
    quartiles: Option<String>,
}

#[derive(Serialize)]
struct TrendFigures {
    price_vs_rating: Value,
    category_price: Value,
    quartile_rating: Value,
    reviews_vs_rating: Value,
}

/// The Trends page's recomputation endpoint: both selectors feed one filter,
/// and all four charts re-aggregate from the filtered rows.
#[get("/api/trends/figures")]
async fn trend_figures(
    table: web::Data<ListingTable>,
    query: web::Query<TrendsQuery>,
) -> HttpResponse {
    let categories: HashSet<String> = match &query.categories {
        Some(raw) => split_selection(raw).map(str::to_string).collect(),
        None => table.categories().iter().cloned().collect(),
    };
    let quartiles: HashSet<PriceCategory> = match &query.quartiles {
        Some(raw) => split_selection(raw)
            .filter_map(PriceCategory::parse)
            .collect(),
        None => PriceCategory::ALL.into_iter().collect(),
    };

    let filter = TrendsFilter {
        categories,
        quartiles,
    };
    let filtered = filter_rows(table.rows(), &filter);
    let rows = filtered.iter().copied();

    let (price_labels, price_means): (Vec<String>, Vec<f64>) =
        mean_price_by_category(rows.clone()).into_iter().unzip();

    HttpResponse::Ok().json(TrendFigures {
        price_vs_rating: figures::grouped_scatter(
            pairs_by_category(rows.clone(), |row| Some(row.price), |row| row.rating),
            "Rating vs price",
            "Price",
            "Rating",
        ),
        category_price: figures::bar(
            price_labels,
            price_means,
            "Average price by category",
            "Category",
            "Average price",
        ),
        quartile_rating: figures::grouped_box(
            ratings_by_quartile(rows.clone())
                .into_iter()
                .map(|(bucket, ratings)| (bucket.to_string(), ratings))
                .collect(),
            "Rating distribution by price quartile",
            "Price quartile",
            "Rating",
        ),
        reviews_vs_rating: figures::grouped_scatter(
            pairs_by_category(rows, |row| Some(row.reviews as f64), |row| row.rating),
            "Rating vs number of reviews",
            "Number of reviews",
            "Rating",
        ),
    })
}

fn split_selection(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
