use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserLoginRes};
use crate::utils::password::verify;
use crate::utils::token::create_token;

#[post("")]
async fn login(
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let payload = body.into_inner();

    let user = db
        .get_user_by_email(&payload.email)
        .await?
        .ok_or(AppError::InvalidEmail)?;

    let valid = verify(&payload.password, &user.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::InvalidPassword);
    }

    let token = create_token(&user.id, &config().jwt_secret)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(ApiResponse::Ok(UserLoginRes { token }))
}
