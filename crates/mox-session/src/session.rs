//! The session-handle contract.

use async_trait::async_trait;
use mox_model::{ObjectPath, Record};

use crate::error::SessionResult;

/// An authenticated connection to a managed system's object tree.
///
/// Implementations must be thread-safe. Mutations are staged and take
/// effect only at [`Session::commit`]; reads see committed state. Retry,
/// timeout, and connection lifecycle are the implementation's concern —
/// callers wanting resilience wrap these calls.
#[async_trait]
pub trait Session: Send + Sync {
    /// Fetches the record at a path, or `None` if nothing lives there.
    ///
    /// ## Errors
    ///
    /// Returns an error on transport failure.
    async fn query_by_path(&self, path: &ObjectPath) -> SessionResult<Option<Record>>;

    /// Stages the addition of a record.
    ///
    /// With `upsert`, an existing record at the path is overwritten at
    /// commit; without it, commit fails when the path is occupied.
    ///
    /// ## Errors
    ///
    /// Returns an error on transport failure.
    async fn add_record(&self, record: Record, upsert: bool) -> SessionResult<()>;

    /// Stages an update merging the record's properties into the record
    /// at its path.
    ///
    /// Singleton paths that have never been written are created by the
    /// merge, which is what makes configure-at-fixed-path an upsert.
    ///
    /// ## Errors
    ///
    /// Returns an error on transport failure.
    async fn update_record(&self, record: Record) -> SessionResult<()>;

    /// Stages the removal of the record at the record's path.
    ///
    /// Commit fails when the path is empty.
    ///
    /// ## Errors
    ///
    /// Returns an error on transport failure.
    async fn remove_record(&self, record: Record) -> SessionResult<()>;

    /// Durably applies the staged mutations, in staging order.
    ///
    /// ## Errors
    ///
    /// Returns [`SessionError::Commit`](crate::SessionError::Commit) when
    /// the managed system rejects a staged mutation; the staged set is
    /// discarded either way.
    async fn commit(&self) -> SessionResult<()>;
}
