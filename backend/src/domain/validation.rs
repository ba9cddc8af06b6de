//! Input checks behind the commands' `validate()`. The services never call
//! these; they run at the boundary before a command is handed over.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Amount must be a non-negative number (got {0})")]
    InvalidAmount(f64),
    #[error("Budget limit must be a non-negative number (got {0})")]
    InvalidLimit(f64),
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount(amount));
    }
    Ok(())
}

pub fn validate_limit(limit: f64) -> Result<(), ValidationError> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(ValidationError::InvalidLimit(limit));
    }
    Ok(())
}
