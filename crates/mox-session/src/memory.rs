//! In-memory staged-commit session.

use std::collections::HashMap;

use async_trait::async_trait;
use mox_model::{ObjectPath, Record};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};
use crate::session::Session;

/// A staged mutation awaiting commit.
#[derive(Debug, Clone)]
enum StagedOp {
    Add { record: Record, upsert: bool },
    Update(Record),
    Remove(Record),
}

#[derive(Debug, Default)]
struct State {
    committed: HashMap<String, Record>,
    staged: Vec<StagedOp>,
    closed: bool,
}

/// In-memory [`Session`] implementation.
///
/// Mutations stage into a buffer and apply to the committed tree only at
/// [`Session::commit`]; queries see committed state. A failed commit
/// discards the staged mutations and leaves the committed tree untouched.
/// Used by the test suite and by tooling that wants a dry-run target.
#[derive(Debug)]
pub struct MemorySession {
    id: Uuid,
    state: RwLock<State>,
}

impl MemorySession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            state: RwLock::new(State::default()),
        }
    }

    /// Returns the session id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Closes the session; every later call fails with
    /// [`SessionError::Closed`].
    pub fn close(&self) {
        self.state.write().closed = true;
    }

    /// Returns whether the session has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }

    /// Number of mutations staged and not yet committed.
    #[must_use]
    pub fn staged_len(&self) -> usize {
        self.state.read().staged.len()
    }

    /// Number of committed records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.state.read().committed.len()
    }

    fn apply(next: &mut HashMap<String, Record>, op: StagedOp) -> SessionResult<()> {
        match op {
            StagedOp::Add { record, upsert } => {
                let key = record.path.as_str().to_string();
                if !upsert && next.contains_key(&key) {
                    return Err(SessionError::commit(format!(
                        "record already exists at '{}'",
                        record.path
                    )));
                }
                next.insert(key, record);
            }
            StagedOp::Update(record) => {
                let key = record.path.as_str().to_string();
                match next.get_mut(&key) {
                    Some(existing) => existing.properties.merge(&record.properties),
                    None => {
                        next.insert(key, record);
                    }
                }
            }
            StagedOp::Remove(record) => {
                if next.remove(record.path.as_str()).is_none() {
                    return Err(SessionError::commit(format!(
                        "no record at '{}'",
                        record.path
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn query_by_path(&self, path: &ObjectPath) -> SessionResult<Option<Record>> {
        let state = self.state.read();
        if state.closed {
            return Err(SessionError::Closed);
        }
        Ok(state.committed.get(path.as_str()).cloned())
    }

    async fn add_record(&self, record: Record, upsert: bool) -> SessionResult<()> {
        let mut state = self.state.write();
        if state.closed {
            return Err(SessionError::Closed);
        }
        tracing::debug!("staged add for '{}' (upsert: {})", record.path, upsert);
        state.staged.push(StagedOp::Add { record, upsert });
        Ok(())
    }

    async fn update_record(&self, record: Record) -> SessionResult<()> {
        let mut state = self.state.write();
        if state.closed {
            return Err(SessionError::Closed);
        }
        tracing::debug!("staged update for '{}'", record.path);
        state.staged.push(StagedOp::Update(record));
        Ok(())
    }

    async fn remove_record(&self, record: Record) -> SessionResult<()> {
        let mut state = self.state.write();
        if state.closed {
            return Err(SessionError::Closed);
        }
        tracing::debug!("staged remove for '{}'", record.path);
        state.staged.push(StagedOp::Remove(record));
        Ok(())
    }

    async fn commit(&self) -> SessionResult<()> {
        let mut state = self.state.write();
        if state.closed {
            return Err(SessionError::Closed);
        }

        let staged = std::mem::take(&mut state.staged);
        let count = staged.len();
        let mut next = state.committed.clone();
        for op in staged {
            Self::apply(&mut next, op)?;
        }
        state.committed = next;

        tracing::info!("session {} committed {} staged mutation(s)", self.id, count);
        Ok(())
    }
}
