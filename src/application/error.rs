use thiserror::Error;

use crate::domain::DomainError;
use crate::infra::ApiError;

/// Error surfaced by client operations: either the server rejected the
/// request, or local pre-validation refused to send it at all.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// HTTP status of the underlying rejection, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status(),
            Self::Domain(_) => None,
        }
    }
}
