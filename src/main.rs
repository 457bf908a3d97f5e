use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use expense_auth::config::{EnvConfig, CONFIG};
use expense_auth::db::mongo_service::MongoService;
use expense_auth::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let mongo_service = Arc::new(
        MongoService::new(&config.mongo_uri, &config.db_name)
            .await
            .expect("Failed to initialize MongoService"),
    );

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&mongo_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
