use actix_web::{web, App};
use std::sync::Arc;
use auth_server::{
    db::user_service::UserService,
    types::{error::AppError, user::DBUserCreate},
    utils::{jwt::TokenIssuer, password::Hasher},
};

use super::TestContext;

pub struct TestClient {
    pub db: Arc<UserService>,
    pub hasher: Arc<Hasher>,
    pub tokens: Arc<TokenIssuer>,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            db: Arc::clone(&ctx.db),
            hasher: Arc::clone(&ctx.hasher),
            tokens: Arc::clone(&ctx.tokens),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.hasher)))
            .app_data(web::Data::new(Arc::clone(&self.tokens)))
            .configure(auth_server::routes::configure_routes)
    }

    /// Registers a user directly through the service, bypassing HTTP.
    #[allow(dead_code)]
    pub fn create_test_user(&self, email: &str, password: &str) -> Result<(), AppError> {
        let password_hash = self.hasher.hash(password)?;
        self.db.create_user(DBUserCreate {
            username: "Test User".to_string(),
            email: email.to_string(),
            password_hash,
        })
    }
}
