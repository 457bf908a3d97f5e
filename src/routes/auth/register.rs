use actix_web::{post, web};
use log::info;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::{DBUserCreate, RUserRegister};
use crate::utils::password::encrypt;

#[post("")]
async fn register(
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<MessageRes> {
    let payload = body.into_inner();

    if db.user_exists_by_email(&payload.email).await? {
        return Err(AppError::EmailExists);
    }

    let password_hash =
        encrypt(&payload.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            username: payload.username,
            email: payload.email,
            password_hash,
        })
        .await?;

    info!("registered user {}", user_id);

    Ok(ApiResponse::Ok(MessageRes {
        message: "User created successfully!".to_string(),
    }))
}
