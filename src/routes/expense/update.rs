use actix_web::{put, web};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::expense::{Expense, RExpenseUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}")]
async fn update(
    db: web::Data<Arc<MongoService>>,
    id: web::Path<String>,
    body: web::Json<RExpenseUpdate>,
) -> ApiResult<Expense> {
    let payload = body.into_inner();

    let expense = db
        .update_expense(&id.into_inner(), payload.title, payload.amount)
        .await?
        .ok_or(AppError::ExpenseNotFound)?;

    Ok(ApiResponse::Ok(expense))
}
