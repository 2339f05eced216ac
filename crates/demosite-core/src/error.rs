//! Shared error type across demosite crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Submitted form failed validation.
    Validation,
    /// Record store could not complete an operation.
    Storage,
    /// Host metrics could not be sampled.
    Probe,
    /// Request body too large.
    PayloadTooLarge,
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION",
            ClientCode::Storage => "STORAGE",
            ClientCode::Probe => "PROBE",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Rejection of a Demo-Form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` or `description` was empty after trimming.
    #[error("Both name and description are required")]
    MissingFields,
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DemoSiteError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DemoSiteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("probe failure: {0}")]
    Probe(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DemoSiteError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DemoSiteError::Validation(_) => ClientCode::Validation,
            DemoSiteError::Storage(_) => ClientCode::Storage,
            DemoSiteError::Probe(_) => ClientCode::Probe,
            DemoSiteError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            DemoSiteError::BadRequest(_) => ClientCode::BadRequest,
            DemoSiteError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_fixed() {
        let err = DemoSiteError::from(ValidationError::MissingFields);
        assert_eq!(err.to_string(), "Both name and description are required");
        assert_eq!(err.client_code().as_str(), "VALIDATION");
    }

    #[test]
    fn storage_and_probe_codes() {
        assert_eq!(DemoSiteError::Storage("x".into()).client_code(), ClientCode::Storage);
        assert_eq!(DemoSiteError::Probe("x".into()).client_code().as_str(), "PROBE");
    }
}
