use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    analytics::ListingTable,
    routes::{conclusions_route, data_route, eda_route, home_route, trends_route},
};

pub fn run(listener: TcpListener, table: ListingTable) -> Result<Server, std::io::Error> {
    let table = web::Data::new(table);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(home_route::home)
            .service(data_route::data)
            .service(data_route::data_view)
            .service(eda_route::eda)
            .service(trends_route::trends)
            .service(trends_route::trend_figures)
            .service(conclusions_route::conclusions)
            .app_data(table.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
