//! Persistence of expense records.
//!
//! Handlers only see the [`ExpenseStore`] trait, so the MongoDB backed store
//! used in production can be swapped for the in-memory one in tests.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::schemas::{Expense, StoredExpense, UserNick};

#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Persists a new expense and returns it with its generated identifier.
    async fn insert(&self, expense: Expense) -> Result<StoredExpense, ApiError>;

    async fn list(&self) -> Result<Vec<StoredExpense>, ApiError>;

    /// Replaces every field of the expense. Returns `false` when no record matched.
    async fn replace(&self, id: ObjectId, expense: Expense) -> Result<bool, ApiError>;

    /// Returns `false` when no record matched.
    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError>;
}

pub fn parse_expense_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidIdentifier)
}

// Mongo has no notion of a naive datetime, wall-clock readings are stored as UTC
#[derive(Debug, Deserialize, Serialize)]
struct ExpenseDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    amount: f64,
    description: String,
    paid_by: UserNick,
    timestamp: bson::DateTime,
}

impl From<&Expense> for ExpenseDocument {
    fn from(expense: &Expense) -> Self {
        ExpenseDocument {
            id: None,
            amount: expense.amount,
            description: expense.description.clone(),
            paid_by: expense.paid_by.clone(),
            timestamp: bson::DateTime::from_chrono(expense.timestamp.and_utc()),
        }
    }
}

impl ExpenseDocument {
    fn into_stored(self) -> StoredExpense {
        StoredExpense {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            expense: Expense {
                amount: self.amount,
                description: self.description,
                paid_by: self.paid_by,
                timestamp: self.timestamp.to_chrono().naive_utc(),
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct MongoExpenseStore {
    expenses: Collection<ExpenseDocument>,
}

impl MongoExpenseStore {
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            expenses: client.database(database).collection(collection),
        }
    }
}

#[async_trait]
impl ExpenseStore for MongoExpenseStore {
    async fn insert(&self, expense: Expense) -> Result<StoredExpense, ApiError> {
        let result = self
            .expenses
            .insert_one(ExpenseDocument::from(&expense), None)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(ApiError::StoreWriteFailure)?;
        tracing::info!(id = %id, paid_by = %expense.paid_by, "expense inserted");

        Ok(StoredExpense {
            id: id.to_hex(),
            expense,
        })
    }

    async fn list(&self) -> Result<Vec<StoredExpense>, ApiError> {
        let cursor = self.expenses.find(None, None).await?;
        let documents: Vec<ExpenseDocument> = cursor.try_collect().await?;
        Ok(documents
            .into_iter()
            .map(ExpenseDocument::into_stored)
            .collect())
    }

    async fn replace(&self, id: ObjectId, expense: Expense) -> Result<bool, ApiError> {
        let document = ExpenseDocument::from(&expense);
        let result = self
            .expenses
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "amount": document.amount,
                    "description": document.description,
                    "paid_by": document.paid_by,
                    "timestamp": document.timestamp,
                }},
                None,
            )
            .await?;
        tracing::info!(id = %id, matched = result.matched_count, "expense update");
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, ApiError> {
        let result = self.expenses.delete_one(doc! { "_id": id }, None).await?;
        tracing::info!(id = %id, deleted = result.deleted_count, "expense delete");
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
pub use in_memory::InMemoryExpenseStore;
