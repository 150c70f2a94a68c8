//! Authentication realm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::property::PropertyError;

/// Authentication backend selected for a login context.
///
/// `None` disables authentication for the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthRealm {
    /// LDAP directory.
    Ldap,
    /// Locally defined accounts.
    #[default]
    Local,
    /// Authentication disabled.
    None,
    /// RADIUS provider group.
    Radius,
    /// TACACS+ provider group.
    Tacacs,
}

impl AuthRealm {
    /// Wire form of the realm keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "ldap",
            Self::Local => "local",
            Self::None => "none",
            Self::Radius => "radius",
            Self::Tacacs => "tacacs",
        }
    }

    /// Returns whether this selection disables authentication.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for AuthRealm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthRealm {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ldap" => Ok(Self::Ldap),
            "local" => Ok(Self::Local),
            "none" => Ok(Self::None),
            "radius" => Ok(Self::Radius),
            "tacacs" => Ok(Self::Tacacs),
            _ => Err(PropertyError::invalid_value(
                "realm",
                s,
                "expected one of ldap, local, none, radius, tacacs",
            )),
        }
    }
}
