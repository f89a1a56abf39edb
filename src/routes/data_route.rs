use actix_web::{get, web, HttpResponse};
use askama::Template;
use serde::Serialize;
use serde_json::Value;

use crate::analytics::{
    self, category_counts, format_price, format_rating, price_category_counts, ListingTable,
    SummaryStats, TableQuery,
};
use crate::domain::Listing;
use crate::routes::figures;

#[derive(Template)]
#[template(path = "data.html")]
struct DataTemplate;

#[get("/data")]
async fn data() -> HttpResponse {
    HttpResponse::Ok().body(DataTemplate.render().unwrap())
}

#[derive(Serialize)]
struct DataViewResponse {
    rows: Vec<RowJson>,
    total_rows: usize,
    page: usize,
    page_count: usize,
    summary: SummaryCards,
    category_fig: Value,
    price_fig: Value,
}

#[derive(Serialize)]
struct SummaryCards {
    total_records: usize,
    missing_values: usize,
    avg_rating: String,
    avg_price: String,
}

// The link column stays out of the table, as on the original dashboard.
#[derive(Serialize)]
struct RowJson {
    title: String,
    price: f64,
    rating: Option<f64>,
    reviews: u32,
    category: String,
    price_category: Option<&'static str>,
}

impl From<&Listing> for RowJson {
    fn from(row: &Listing) -> Self {
        RowJson {
            title: row.title.clone(),
            price: row.price,
            rating: row.rating,
            reviews: row.reviews,
            category: row.category.clone(),
            price_category: row.price_category.map(|bucket| bucket.as_str()),
        }
    }
}

/// The Data page's single recomputation endpoint: every change of the table
/// controls re-derives the summary cards and both distribution charts from
/// the full filtered view, plus the rows of the requested page.
#[get("/api/data/view")]
async fn data_view(
    table: web::Data<ListingTable>,
    query: web::Query<TableQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let view = analytics::apply(table.rows(), &query);
    let visible = view.filtered.iter().copied();

    let stats = SummaryStats::compute(visible.clone());
    let summary = SummaryCards {
        total_records: stats.total_records,
        missing_values: stats.missing_values,
        avg_rating: format_rating(stats.mean_rating),
        avg_price: format_price(stats.mean_price),
    };

    let (category_labels, category_values): (Vec<String>, Vec<usize>) =
        category_counts(visible.clone()).into_iter().unzip();
    let (bucket_labels, bucket_values): (Vec<String>, Vec<usize>) = price_category_counts(visible)
        .into_iter()
        .map(|(bucket, count)| (bucket.to_string(), count))
        .unzip();

    HttpResponse::Ok().json(DataViewResponse {
        rows: view.page_rows().iter().copied().map(RowJson::from).collect(),
        total_rows: view.filtered.len(),
        page: view.page,
        page_count: view.page_count,
        summary,
        category_fig: figures::pie(category_labels, category_values, "Listings by category"),
        price_fig: figures::bar(
            bucket_labels,
            bucket_values.into_iter().map(|count| count as f64).collect(),
            "Listings by price quartile",
            "Price quartile",
            "Count",
        ),
    })
}
