use actix_web::{get, HttpResponse};
use askama::Template;

#[derive(Template)]
#[template(path = "conclusions.html")]
struct ConclusionsTemplate;

#[get("/conclusions")]
async fn conclusions() -> HttpResponse {
    HttpResponse::Ok().body(ConclusionsTemplate.render().unwrap())
}
