use actix_web::{get, web};
use std::sync::Arc;

use crate::db::mongo_service::MongoService;
use crate::types::expense::Expense;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(db: web::Data<Arc<MongoService>>) -> ApiResult<Vec<Expense>> {
    let expenses = db.list_expenses().await?;
    Ok(ApiResponse::Ok(expenses))
}
