//! # mox-model
//!
//! Managed-object data model for mox.
//!
//! This crate defines the value types exchanged with a hardware management
//! controller's path-addressed object tree: deterministic paths, open-ended
//! property maps, the untyped wire [`Record`], and the typed authentication
//! records built on top of them.
//!
//! Everything here is pure data — no I/O, no session handle. Path and
//! property logic is testable without a live connection.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod domain;
pub mod native;
pub mod path;
pub mod property;
pub mod realm;
pub mod record;

pub use domain::{AuthDomain, DomainRealmBinding};
pub use native::{ConsoleAuthRealm, DefaultAuthRealm, NativeAuthRealm};
pub use path::ObjectPath;
pub use property::{PropertyError, PropertyMap};
pub use realm::AuthRealm;
pub use record::{ManagedObject, Record};
