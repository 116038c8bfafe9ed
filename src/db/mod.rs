pub mod credential_store;
pub mod user;
pub mod user_service;
