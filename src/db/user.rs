use mongodb::bson::doc;

use crate::db::mongo_service::MongoService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, User},
};
use crate::utils::token::new_id;

impl MongoService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .users()
            .count_documents(doc! { "email": email }, None)
            .await?
            > 0)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users().find_one(doc! { "email": email }, None).await?)
    }

    /// Signup: create user with a fresh UUID id.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<String, AppError> {
        let uid = new_id().to_string();

        self.users()
            .insert_one(
                User {
                    id: uid.clone(),
                    username: payload.username,
                    email: payload.email,
                    password: payload.password_hash,
                },
                None,
            )
            .await?;

        Ok(uid)
    }
}
