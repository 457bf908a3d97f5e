use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
}

/// Create payload. Both fields are optional at the wire level so the handler
/// can answer with the fixed validation message instead of a bare 400.
#[derive(Debug, Deserialize)]
pub struct RExpenseCreate {
    pub title: Option<String>,
    pub amount: Option<f64>,
}

/// Update is a full replace of title/amount.
#[derive(Debug, Deserialize)]
pub struct RExpenseUpdate {
    pub title: String,
    pub amount: f64,
}
