//! Envelope types shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Error payload returned by the backend for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub status_code: u16,
}

/// Generic acknowledgement body for deletes and similar fire-and-forget calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_roundtrip() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Not authenticated","status_code":401}"#)
                .expect("error body");
        assert_eq!(body.detail, "Not authenticated");
        assert_eq!(body.status_code, 401);
    }
}
