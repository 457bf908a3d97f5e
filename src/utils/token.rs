use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::types::token::Claims;

const TOKEN_LIFE_HOURS: i64 = 1;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Issue a signed token for `user_id`, valid for one hour.
pub fn create_token(user_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_LIFE_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        id: user_id.to_string(),
        role: String::new(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
