use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::types::{error::AppError, user::RUserRegister};

/// Cheap shape check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }
    if !looks_like_email(email) {
        return Err(AppError::Validation("Email is not valid".into()));
    }
    Ok(())
}

/// Username and password checks; the email is vetted separately.
pub fn validate_profile(body: &RUserRegister) -> Result<(), AppError> {
    if body.username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }
    if body.password.trim().is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }
    Ok(())
}

/// Malformed JSON bodies answer with the same `{message}` shape as other 400s.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(format!("Invalid request body: {err}")).into()
}
