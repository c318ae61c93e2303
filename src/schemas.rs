use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type UserNick = String;

/// A timestamp as submitted by a client, with or without an UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SubmittedTimestamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl SubmittedTimestamp {
    /// Drops the offset, keeping the wall-clock reading as is.
    pub fn into_naive(self) -> NaiveDateTime {
        match self {
            SubmittedTimestamp::Aware(datetime) => datetime.naive_local(),
            SubmittedTimestamp::Naive(datetime) => datetime,
        }
    }
}

/// Body of `POST /expenses` and `PUT /expenses/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpenseForm {
    pub amount: f64,
    pub description: String,
    pub paid_by: UserNick,
    #[serde(default)]
    pub timestamp: Option<SubmittedTimestamp>,
}

/// An expense that went through validation and can be persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Expense {
    pub amount: f64,
    pub description: String,
    pub paid_by: UserNick,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredExpense {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub expense: Expense,
}

/// Envelope shared by every response, successful or not.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}
