use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::db::mongo_service::MongoService;
use crate::types::{error::AppError, expense::Expense};
use crate::utils::token::new_id;

impl MongoService {
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, AppError> {
        let cursor = self.expenses().find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_expense(&self, id: &str) -> Result<Option<Expense>, AppError> {
        Ok(self.expenses().find_one(doc! { "_id": id }, None).await?)
    }

    pub async fn create_expense(&self, title: String, amount: f64) -> Result<Expense, AppError> {
        let expense = Expense {
            id: new_id().to_string(),
            title,
            amount,
        };
        self.expenses().insert_one(&expense, None).await?;
        Ok(expense)
    }

    /// Full replace of title/amount; returns the updated document.
    pub async fn update_expense(
        &self,
        id: &str,
        title: String,
        amount: f64,
    ) -> Result<Option<Expense>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .expenses()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "title": title, "amount": amount } },
                options,
            )
            .await?)
    }

    pub async fn delete_expense(&self, id: &str) -> Result<Option<Expense>, AppError> {
        Ok(self
            .expenses()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }

    pub async fn count_expenses(&self) -> Result<u64, AppError> {
        Ok(self.expenses().count_documents(doc! {}, None).await?)
    }
}
