use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::analytics::ListingTable;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    categories: Vec<String>,
    total_records: usize,
}

#[get("/")]
async fn home(table: web::Data<ListingTable>) -> HttpResponse {
    HttpResponse::Ok().body(
        HomeTemplate {
            categories: table.categories().to_vec(),
            total_records: table.rows().len(),
        }
        .render()
        .unwrap(),
    )
}
