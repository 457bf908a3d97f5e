use actix_web::{delete, web};
use log::info;
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[delete("/{id}")]
async fn delete(db: web::Data<Arc<MongoService>>, id: web::Path<String>) -> ApiResult<MessageRes> {
    let deleted = db
        .delete_expense(&id.into_inner())
        .await?
        .ok_or(AppError::ExpenseNotFound)?;

    info!("deleted expense {} ({})", deleted.id, deleted.title);

    Ok(ApiResponse::Ok(MessageRes {
        message: "Deleted successfully".to_string(),
    }))
}
