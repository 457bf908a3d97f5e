use serde::{Deserialize, Serialize};

/// JWT payload carried by login-issued tokens.
/// `role` is issued empty; it exists for forward compatibility with the
/// login response contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub role: String,
    pub exp: usize,
}
