use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::analytics::{
    correlation_matrix, pairs_by_category, series_by_category, ListingTable,
};
use crate::routes::figures;

#[derive(Template)]
#[template(path = "eda.html")]
struct EdaTemplate {
    // JSON array of Plotly figures, embedded verbatim into the page script.
    figures: String,
}

#[get("/eda")]
async fn eda(table: web::Data<ListingTable>) -> HttpResponse {
    let rows = table.rows();

    let figures = vec![
        figures::grouped_box(
            series_by_category(rows, |row| Some(row.price)),
            "Price distribution by category",
            "Category",
            "Price",
        ),
        figures::grouped_box(
            series_by_category(rows, |row| row.rating),
            "Rating distribution by category",
            "Category",
            "Rating",
        ),
        figures::histogram(
            rows.iter().filter_map(|row| row.rating).collect(),
            20,
            "Rating distribution",
            "Rating",
        ),
        figures::heatmap(
            vec!["Price", "Rating", "Reviews"],
            correlation_matrix(rows),
            "Correlation between numeric columns",
        ),
        figures::grouped_scatter(
            pairs_by_category(rows, |row| Some(row.reviews as f64), |row| row.rating),
            "Rating vs number of reviews",
            "Number of reviews",
            "Rating",
        ),
    ];

    let template = EdaTemplate {
        figures: serde_json::to_string(&figures).unwrap(),
    };
    HttpResponse::Ok().body(template.render().unwrap())
}
