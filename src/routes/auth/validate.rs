use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenValidateRes;
use crate::utils::jwt::TokenIssuer;

#[post("")]
pub async fn validate(
    tokens: web::Data<Arc<TokenIssuer>>,
    auth: Option<BearerAuth>,
) -> ApiResult<TokenValidateRes> {
    let auth = auth.ok_or(AppError::InvalidToken)?;
    let claims = tokens.verify(auth.token())?;

    Ok(ApiResponse::Ok(TokenValidateRes {
        email: claims.email,
        exp: claims.exp,
    }))
}
