use crate::utils::webutils::json_error_handler;
use actix_web::web;

pub mod auth;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::scope("/register")
                    .service(auth::register::register)
            )
            .service(
                web::scope("/login")
                    .service(auth::login::login)
            )
            .service(
                web::scope("/validate")
                    .service(auth::validate::validate)
            )
    );
}
