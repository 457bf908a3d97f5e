use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub mongo_uri: String,
    pub db_name: String,
    pub jwt_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            mongo_uri: Self::get_env("MONGODB_URI"),
            db_name: Self::get_env_or("MONGO_DB", "expenses"),
            jwt_secret: Self::get_env("JWT_SECRET"),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
