use serde::{Deserialize, Serialize};

/// Stored user document. The UUID goes into `_id` so the store enforces
/// uniqueness on it; `password` holds the argon2 PHC string, never plaintext.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RUserRegister {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserLoginRes {
    pub token: String,
}
