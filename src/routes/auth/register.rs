use actix_web::{post, web};
use std::sync::Arc;

use crate::db::user_service::UserService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserRegisterRes};
use crate::utils::password::Hasher;
use crate::utils::webutils::{validate_email, validate_profile};

#[post("")]
pub async fn register(
    db: web::Data<Arc<UserService>>,
    hasher: web::Data<Arc<Hasher>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRegisterRes> {
    let body = body.into_inner();
    validate_email(&body.email)?;

    // A taken email wins over every other complaint about the body.
    let lookup = Arc::clone(&db);
    let email = body.email.clone();
    if web::block(move || lookup.user_exists_by_email(&email)).await?? {
        return Err(AppError::DuplicateUser);
    }
    validate_profile(&body)?;

    // Hash before taking the store lock; argon2 is the slow part.
    let hasher = Arc::clone(&hasher);
    let password = body.password;
    let password_hash = web::block(move || hasher.hash(&password)).await??;

    // create_user re-checks under the lock in case of a racing signup.
    let db = Arc::clone(&db);
    let payload = DBUserCreate {
        username: body.username,
        email: body.email,
        password_hash,
    };
    web::block(move || db.create_user(payload)).await??;

    Ok(ApiResponse::Created(UserRegisterRes {
        message: "User registered successfully".to_string(),
    }))
}
