use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::schemas::ApiResponse;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidExpense(String),
    #[error("Invalid expense ID format")]
    InvalidIdentifier,
    #[error("Expense not found")]
    NotFound,
    #[error("Failed to add expense")]
    StoreWriteFailure,
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidExpense(_) | ApiError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StoreWriteFailure | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}
