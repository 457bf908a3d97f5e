use expense_auth::config::{EnvConfig, CONFIG};
use expense_auth::db::mongo_service::MongoService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-secret";

pub struct TestContext {
    pub db: Arc<MongoService>,
    pub _container: ContainerAsync<Mongo>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // the bearer middleware and login handler read the global config
        let _ = CONFIG.set(get_test_config());

        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start mongo container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get port");

        let db_url = format!("mongodb://{}:{}", host, port);

        let db = Arc::new(
            MongoService::new(&db_url, "expenses_test")
                .await
                .expect("Failed to initialize MongoService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        mongo_uri: "test".to_string(), // Not used in tests
        db_name: "expenses_test".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    pub fn sample_user() -> Value {
        json!({
            "username": "Test User",
            "email": "test@example.com",
            "password": "s3cret-pass"
        })
    }

    pub fn sample_user_with_email(email: &str) -> Value {
        json!({
            "username": "Test User",
            "email": email,
            "password": "s3cret-pass"
        })
    }

    pub fn unique_email() -> String {
        format!("user-{}@test.com", Uuid::new_v4())
    }

    pub fn sample_expense() -> Value {
        json!({ "title": "Food", "amount": 200.0 })
    }
}
