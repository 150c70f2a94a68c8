//! Façade error types.

use mox_model::PropertyError;
use mox_session::SessionError;
use thiserror::Error;

/// Errors raised by the configuration façade.
///
/// Only required-lookup failures are translated into
/// [`OperationError::NotFound`]; session and record failures propagate
/// unchanged from their source. The façade performs no retries and no
/// local recovery.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A lookup the operation requires found nothing at the resolved path.
    #[error("{operation}: {kind} at '{path}' does not exist")]
    NotFound {
        /// The operation the caller invoked.
        operation: &'static str,
        /// Kind of record looked up (e.g. "auth domain").
        kind: &'static str,
        /// The resolved path.
        path: String,
    },

    /// Session-handle failure, propagated unchanged.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Record interpretation failure, propagated unchanged.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl OperationError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(operation: &'static str, kind: &'static str, path: impl Into<String>) -> Self {
        Self::NotFound {
            operation,
            kind,
            path: path.into(),
        }
    }

    /// Checks if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for façade operations.
pub type OperationResult<T> = Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_operation_and_path() {
        let err = OperationError::not_found("auth_domain_modify", "auth domain", "sys/auth-realm/domain-d1");

        assert!(err.is_not_found());
        let message = err.to_string();
        assert!(message.contains("auth_domain_modify"));
        assert!(message.contains("sys/auth-realm/domain-d1"));
    }

    #[test]
    fn session_errors_pass_through_unchanged() {
        let err = OperationError::from(SessionError::commit("rejected"));

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), SessionError::commit("rejected").to_string());
    }
}
