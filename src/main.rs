use actix_web::{middleware::Logger, web, App, HttpServer};
use auth_server::config::EnvConfig;
use auth_server::db::user_service::UserService;
use auth_server::routes::configure_routes;
use auth_server::utils::{jwt::TokenIssuer, password::Hasher};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // No secret, no server.
    let config = EnvConfig::from_env()?;
    let tokens = Arc::new(TokenIssuer::new(&config.jwt_secret)?);
    let hasher = Arc::new(Hasher::new(config.hash)?);
    let user_service = Arc::new(UserService::from_file(&config.users_file)?);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Server running on port {}", config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&user_service)))
            .app_data(web::Data::new(Arc::clone(&hasher)))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
