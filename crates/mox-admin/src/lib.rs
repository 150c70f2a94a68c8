//! # mox-admin
//!
//! Authentication configuration façade for managed systems.
//!
//! Operations translate typed calls into record construction plus a
//! commit through an injected [`Session`](mox_session::Session) handle:
//! resolve path → (optionally fetch) → construct or mutate a record →
//! submit → commit → return the record.
//!
//! Create is an idempotent upsert so provisioning scripts can re-run
//! against partially configured systems; modify and delete require prior
//! existence so a typoed name fails loudly instead of silently creating.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod auth;
pub mod error;
pub mod request;

pub use auth::{
    auth_domain_create, auth_domain_delete, auth_domain_exists, auth_domain_get,
    auth_domain_modify, auth_domain_realm_configure, native_auth_configure, native_auth_console,
    native_auth_default,
};
pub use error::{OperationError, OperationResult};
pub use request::{
    ConfigureConsoleAuth, ConfigureDefaultAuth, ConfigureNativeAuth, ConfigureRealmBinding,
};
