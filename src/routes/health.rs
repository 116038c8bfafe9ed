use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::user_service::UserService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

/// Healthy means the credential store can be read right now.
#[get("")]
pub async fn health(
    db: web::Data<Arc<UserService>>,
) -> ApiResult<Response> {
    let db = Arc::clone(&db);
    web::block(move || db.list_users()).await??;

    Ok(ApiResponse::Ok(Response { status: "ok".to_string() }))
}
