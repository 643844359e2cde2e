// The single error kind surfaced by upstream generation.

use thiserror::Error;

/// Any failure of an upstream generation call: network, authentication,
/// quota, or an unusable response body. Callers never branch on the cause;
/// the description is carried through to the HTTP error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Gemini API error: {message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the underlying failure, without the generic prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
