use log::info;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::types::expense::Expense;
use crate::types::user::User;

#[derive(Clone)]
pub struct MongoService {
    pub(crate) db: Database,
}

impl MongoService {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        info!("Connecting to MongoDB...");
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        println!("Connected to MongoDB");

        let service = Self { db };
        service.ensure_indexes().await?;
        Ok(service)
    }

    /// Email uniqueness lives in the store, not just in the register
    /// handler's pre-check.
    async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(index, None).await?;
        info!("Unique email index ensured");
        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection::<User>("users")
    }

    pub fn expenses(&self) -> Collection<Expense> {
        self.db.collection::<Expense>("expenses")
    }
}
