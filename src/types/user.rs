use serde::{Deserialize, Serialize};

/// A registered user as persisted in the credential file.
///
/// The hash lives under the `password` key on disk so files written by
/// earlier deployments keep loading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserRegister {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRegisterRes {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserLoginRes {
    pub token: String,
}

pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
