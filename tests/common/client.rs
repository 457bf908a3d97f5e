use actix_web::{web, App};
use expense_auth::{
    db::mongo_service::MongoService,
    types::user::DBUserCreate,
    utils::{password::encrypt, token::create_token},
};
use std::sync::Arc;

use super::TEST_JWT_SECRET;

pub struct TestClient {
    pub db: Arc<MongoService>,
}

impl TestClient {
    pub fn new(db: Arc<MongoService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(expense_auth::routes::configure_routes)
    }

    /// Seed a user directly through the db layer and mint a bearer token
    /// for it, skipping the register/login round trips.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (String, String) {
        let email = email.unwrap_or_else(super::test_data::unique_email);
        let password_hash = encrypt("s3cret-pass").expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                username: "Test User".to_string(),
                email,
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let token = create_token(&user_id, TEST_JWT_SECRET).expect("Failed to create token");

        (user_id, token)
    }
}
