//! # mox-session
//!
//! The session-handle contract consumed by the mox configuration façades,
//! plus an in-memory implementation.
//!
//! A [`Session`] represents an authenticated connection to a managed
//! system. Mutations are staged (`add_record`, `update_record`,
//! `remove_record`) and durably applied by `commit`; reads
//! (`query_by_path`) see committed state only. Opening, authenticating,
//! and closing the connection is the implementation's concern — nothing
//! in this crate manages transport.
//!
//! [`MemorySession`] implements the contract over an in-process tree and
//! backs the test suite and dry-run tooling.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use memory::MemorySession;
pub use session::Session;
