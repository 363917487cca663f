use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    /// A business rule was violated or a required field was missing.
    #[error("{0}")]
    Validation(String),
    #[error("Budget not found for this user")]
    NotFound { user_id: String },
    #[error("Budget already exists for this user")]
    AlreadyExists { user_id: String },
    #[error("Invalid action")]
    InvalidAction(String),
    #[error("Invalid route for inspection")]
    InvalidRoute(String),
    /// The payload was not valid hex, not UTF-8, or not parsable JSON.
    #[error("Malformed payload: {0}")]
    Decode(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Coordinator error: {0}")]
    Coordinator(String),
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
