//! Session error types.

use thiserror::Error;

/// Errors raised by a session handle.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Transport failure talking to the managed system.
    #[error("connection error: {0}")]
    Connection(String),

    /// The managed system rejected staged mutations at commit.
    #[error("commit failed: {0}")]
    Commit(String),

    /// The session has been closed.
    #[error("session is closed")]
    Closed,
}

impl SessionError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a commit error.
    #[must_use]
    pub fn commit(message: impl Into<String>) -> Self {
        Self::Commit(message.into())
    }

    /// Checks if this is a commit rejection.
    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }

    /// Checks if this is a closed-session error.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_error() {
        let err = SessionError::commit("record already exists at 'sys/auth-realm/domain-d1'");

        assert!(err.is_commit());
        assert!(!err.is_closed());
        assert!(err.to_string().contains("domain-d1"));
    }

    #[test]
    fn closed_error() {
        assert!(SessionError::Closed.is_closed());
        assert_eq!(SessionError::Closed.to_string(), "session is closed");
    }
}
