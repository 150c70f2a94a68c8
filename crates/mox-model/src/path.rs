//! Path addressing for the managed-object tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root of the configuration tree.
pub const SYS: &str = "sys";

/// Root under which authentication records live.
pub const AUTH_REALM: &str = "sys/auth-realm";

/// Hierarchical address uniquely locating a record in the object tree.
///
/// Paths are `/`-separated strings. Construction is deterministic and
/// independent of any session handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// Creates a path from an already-resolved address.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The `sys` root.
    #[must_use]
    pub fn sys() -> Self {
        Self(SYS.to_string())
    }

    /// The `sys/auth-realm` root.
    #[must_use]
    pub fn auth_realm() -> Self {
        Self(AUTH_REALM.to_string())
    }

    /// The path of the auth domain with the given name.
    ///
    /// Domain paths are deterministic: `sys/auth-realm/domain-<name>`.
    #[must_use]
    pub fn auth_domain(name: &str) -> Self {
        Self(format!("{}/domain-{}", AUTH_REALM, name))
    }

    /// Appends a segment, producing a child path.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}/{}", self.0, segment))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment of the path.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_path_is_deterministic() {
        let path = ObjectPath::auth_domain("d1");
        assert_eq!(path.as_str(), "sys/auth-realm/domain-d1");
        assert_eq!(path, ObjectPath::auth_domain("d1"));
    }

    #[test]
    fn child_appends_segment() {
        let path = ObjectPath::auth_domain("d1").child("realm");
        assert_eq!(path.as_str(), "sys/auth-realm/domain-d1/realm");
    }

    #[test]
    fn last_segment() {
        assert_eq!(ObjectPath::auth_domain("d1").last_segment(), "domain-d1");
        assert_eq!(ObjectPath::sys().last_segment(), "sys");
    }
}
