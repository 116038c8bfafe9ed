use actix_web::{post, web};
use std::sync::Arc;

use crate::db::user_service::UserService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserLoginRes};
use crate::utils::jwt::TokenIssuer;
use crate::utils::password::Hasher;

#[post("")]
pub async fn login(
    db: web::Data<Arc<UserService>>,
    hasher: web::Data<Arc<Hasher>>,
    tokens: web::Data<Arc<TokenIssuer>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let RUserLogin { email, password } = body.into_inner();

    let db = Arc::clone(&db);
    let user = web::block(move || db.get_user_by_email(&email)).await??;

    // Unknown emails still pay for a verification so timing and message
    // match a wrong password.
    let hasher = Arc::clone(&hasher);
    let verified = web::block(move || match user {
        Some(user) if hasher.verify(&password, &user.password_hash) => Some(user.email),
        Some(_) => None,
        None => {
            hasher.verify_dummy(&password);
            None
        }
    })
    .await?;

    let email = verified.ok_or(AppError::InvalidCredentials)?;
    let token = tokens.issue(&email)?;

    Ok(ApiResponse::Ok(UserLoginRes { token }))
}
