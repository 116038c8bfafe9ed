use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // caller mistakes
    #[error("User already exists")]
    DuplicateUser,
    // one message for both "no such email" and "wrong password"
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("Invalid token")]
    InvalidToken,

    // infra things
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Internal(_))
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUser | Self::InvalidCredentials | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let text = self.to_string();
        let mut res = HttpResponse::build(self.status_code());
        if self.is_server_error() {
            error!("request failed: {text}");
            res.json(ErrorBody { error: &text })
        } else {
            res.json(MessageBody { message: &text })
        }
    }
}
