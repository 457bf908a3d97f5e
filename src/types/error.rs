use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // domain failures with fixed wire messages
    #[error("Email already exists")]
    EmailExists,
    #[error("Invalid Email")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Expense not found")]
    ExpenseNotFound,
    #[error("{0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    Db(#[from] mongodb::error::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::EmailExists => "EMAIL_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::ExpenseNotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailExists | Self::InvalidEmail | Self::InvalidPassword | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::ExpenseNotFound => StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // store faults are logged server-side and masked on the wire
        let message = match self {
            Self::Db(e) => {
                error!("database error: {}", e);
                "Internal server error".to_string()
            }
            Self::Internal(e) => {
                error!("internal error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &message,
        })
    }
}
