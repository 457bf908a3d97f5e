use actix_web::{get, web};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::expense::Expense;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get(db: web::Data<Arc<MongoService>>, id: web::Path<String>) -> ApiResult<Expense> {
    let expense = db
        .get_expense(&id.into_inner())
        .await?
        .ok_or(AppError::ExpenseNotFound)?;

    Ok(ApiResponse::Ok(expense))
}
