use actix_web::{post, web};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::error::AppError;
use crate::types::expense::{Expense, RExpenseCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    db: web::Data<Arc<MongoService>>,
    body: web::Json<RExpenseCreate>,
) -> ApiResult<Expense> {
    let payload = body.into_inner();

    // both fields must be present before anything touches the store
    let (title, amount) = match (payload.title, payload.amount) {
        (Some(title), Some(amount)) if !title.is_empty() => (title, amount),
        _ => {
            return Err(AppError::Validation(
                "please provide both title and amount".to_string(),
            ))
        }
    };

    let expense = db.create_expense(title, amount).await?;
    Ok(ApiResponse::Created(expense))
}
