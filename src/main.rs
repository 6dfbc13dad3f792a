use actix_web::{middleware::Logger, web, App, HttpServer};
use org_auth::config::EnvConfig;
use org_auth::db::postgres_service::PostgresService;
use org_auth::routes::configure_routes;
use org_auth::utils::token::TokenService;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );
    let tokens = web::Data::new(TokenService::from_config(&config.jwt));

    info!("Starting server on 0.0.0.0:{}", config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(tokens.clone())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
