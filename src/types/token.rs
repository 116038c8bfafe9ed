use serde::{Deserialize, Serialize};

/// Claims carried by a login token. Timestamps are seconds since the epoch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenValidateRes {
    pub email: String,
    pub exp: i64,
}
