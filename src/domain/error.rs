use mensa_api_types::OrderStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cannot transition order from `{from}` to `{to}`")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("domain validation failed: {message}")]
    Validation { message: String },
    #[error("action not permitted: {message}")]
    Forbidden { message: String },
}

impl DomainError {
    pub fn transition(from: OrderStatus, to: OrderStatus) -> Self {
        Self::InvalidTransition { from, to }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }
}
