#[macro_use]
extern crate log;

use std::io;

use actix_cors::Cors;
use actix_web::{
    http::header,
    middleware::{Condition, Logger},
    web, App, HttpResponse, HttpServer,
};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod handlers;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::routes;
use errors::ErrorResponse;

fn startup_error(err: errors::Error) -> io::Error {
    error!("Failed to start - {}", err);
    io::Error::new(io::ErrorKind::Other, err)
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load().map_err(startup_error)?;

    let pool = db::new_pool(&config.database_url, config.pool_size).map_err(startup_error)?;
    {
        let mut conn = db::get_conn(&pool).map_err(startup_error)?;
        db::run_migrations(&mut conn).map_err(startup_error)?;
    }
    let pool = web::Data::new(pool);

    let client_host = config.client_host.clone();
    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        let cors = match &client_host {
            Some(host) => Cors::default()
                .allowed_origin(host)
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(Condition::new(client_host.is_some(), cors))
            .wrap(Logger::default())
            .app_data(pool.clone())
            .configure(routes)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
            }))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
