use std::io;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;

use product_service::db::{establish_connection_pool_with_size, run_pending_migrations};
use product_service::models::config::ServerConfig;
use product_service::repository::DieselRepository;
use product_service::routes::configure;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return Err(io::Error::other(e));
        }
    };

    // An unreachable store stops startup instead of serving 500s.
    let pool = match establish_connection_pool_with_size(
        &server_config.database_url,
        server_config.max_connections,
    ) {
        Ok(pool) => {
            log::info!("Store connected: {}", server_config.database_url);
            pool
        }
        Err(e) => {
            log::error!("Store connection error: {e}");
            return Err(io::Error::other(e));
        }
    };

    match run_pending_migrations(&pool) {
        Ok(applied) => log::info!("Applied {applied} pending migration(s)"),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            return Err(io::Error::other(e));
        }
    }

    let repo = web::Data::new(DieselRepository::new(pool));

    log::info!("Server running at http://{}", server_config.bind_address());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .configure(configure)
    })
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
