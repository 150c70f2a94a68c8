//! Auth domain records.
//!
//! An auth domain is a named login context. Its path is deterministic from
//! its name (`sys/auth-realm/domain-<name>`), and the name must be unique
//! among sibling domains. Each domain owns a single realm binding child
//! record selecting the authentication backend for the domain.

use serde::{Deserialize, Serialize};

use crate::path::ObjectPath;
use crate::property::{parse_u32, parse_yes_no, yes_no, PropertyError, PropertyMap};
use crate::realm::AuthRealm;
use crate::record::{ManagedObject, Record};

/// Default login refresh period in seconds.
pub const DEFAULT_REFRESH_PERIOD: u32 = 600;

/// Default web session timeout in seconds.
pub const DEFAULT_SESSION_TIMEOUT: u32 = 7200;

/// A named authentication domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthDomain {
    /// Domain name; determines the record path.
    pub name: String,
    /// Login refresh period in seconds.
    pub refresh_period: u32,
    /// Web session timeout in seconds.
    pub session_timeout: u32,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied after the named fields.
    pub extra: PropertyMap,
}

impl AuthDomain {
    /// Creates a domain with the default refresh period and session timeout.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refresh_period: DEFAULT_REFRESH_PERIOD,
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            descr: None,
            extra: PropertyMap::new(),
        }
    }

    /// Sets the refresh period.
    #[must_use]
    pub const fn with_refresh_period(mut self, seconds: u32) -> Self {
        self.refresh_period = seconds;
        self
    }

    /// Sets the session timeout.
    #[must_use]
    pub const fn with_session_timeout(mut self, seconds: u32) -> Self {
        self.session_timeout = seconds;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    /// Adds an extension property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key, value);
        self
    }
}

impl ManagedObject for AuthDomain {
    fn class_id(&self) -> &'static str {
        "authDomain"
    }

    fn path(&self) -> ObjectPath {
        ObjectPath::auth_domain(&self.name)
    }

    fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new()
            .set("name", &self.name)
            .set("refreshPeriod", self.refresh_period.to_string())
            .set("sessionTimeout", self.session_timeout.to_string());
        if let Some(ref descr) = self.descr {
            props.insert("descr", descr);
        }
        props.merge(&self.extra);
        props
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<(), PropertyError> {
        match key {
            "name" => self.name = value.to_string(),
            "refreshPeriod" => self.refresh_period = parse_u32(key, value)?,
            "sessionTimeout" => self.session_timeout = parse_u32(key, value)?,
            "descr" => self.descr = Some(value.to_string()),
            _ => {
                self.extra.insert(key, value);
            }
        }
        Ok(())
    }
}

impl TryFrom<&Record> for AuthDomain {
    type Error = PropertyError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let name = record
            .property("name")
            .map(str::to_owned)
            .or_else(|| {
                record
                    .path
                    .last_segment()
                    .strip_prefix("domain-")
                    .map(str::to_owned)
            })
            .ok_or_else(|| {
                PropertyError::malformed("authDomain", record.path.as_str(), "record has no domain name")
            })?;

        let mut domain = Self::new(name);
        domain.apply(&record.properties)?;
        Ok(domain)
    }
}

/// The realm binding of an auth domain: which authentication backend the
/// domain uses, and whether two-factor authentication is required.
///
/// Lives at `<domain-path>/realm`. The two-factor flag is rendered as the
/// enumerated strings `yes`/`no` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRealmBinding {
    parent: ObjectPath,
    /// Selected authentication backend.
    pub realm: AuthRealm,
    /// Whether two-factor authentication is required.
    pub use_two_factor: bool,
    /// Provider group consulted by the backend.
    pub provider_group: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied after the named fields.
    pub extra: PropertyMap,
}

impl DomainRealmBinding {
    /// Creates a binding under the given auth domain path, defaulting to
    /// the `local` realm without two-factor authentication.
    #[must_use]
    pub fn new(parent: ObjectPath) -> Self {
        Self {
            parent,
            realm: AuthRealm::default(),
            use_two_factor: false,
            provider_group: None,
            name: None,
            descr: None,
            extra: PropertyMap::new(),
        }
    }

    /// Path of the owning auth domain.
    #[must_use]
    pub const fn parent(&self) -> &ObjectPath {
        &self.parent
    }

    /// Selects the authentication backend.
    #[must_use]
    pub const fn with_realm(mut self, realm: AuthRealm) -> Self {
        self.realm = realm;
        self
    }

    /// Sets the two-factor requirement.
    #[must_use]
    pub const fn with_two_factor(mut self, enabled: bool) -> Self {
        self.use_two_factor = enabled;
        self
    }

    /// Sets the provider group.
    #[must_use]
    pub fn with_provider_group(mut self, group: impl Into<String>) -> Self {
        self.provider_group = Some(group.into());
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    /// Adds an extension property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key, value);
        self
    }
}

impl ManagedObject for DomainRealmBinding {
    fn class_id(&self) -> &'static str {
        "domainRealm"
    }

    fn path(&self) -> ObjectPath {
        self.parent.child("realm")
    }

    fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new()
            .set("realm", self.realm.as_str())
            .set("use2Factor", yes_no(self.use_two_factor));
        if let Some(ref group) = self.provider_group {
            props.insert("providerGroup", group);
        }
        if let Some(ref name) = self.name {
            props.insert("name", name);
        }
        if let Some(ref descr) = self.descr {
            props.insert("descr", descr);
        }
        props.merge(&self.extra);
        props
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<(), PropertyError> {
        match key {
            "realm" => self.realm = value.parse()?,
            "use2Factor" => self.use_two_factor = parse_yes_no(key, value)?,
            "providerGroup" => self.provider_group = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "descr" => self.descr = Some(value.to_string()),
            _ => {
                self.extra.insert(key, value);
            }
        }
        Ok(())
    }
}

impl TryFrom<&Record> for DomainRealmBinding {
    type Error = PropertyError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let parent = record
            .path
            .as_str()
            .strip_suffix("/realm")
            .map(ObjectPath::new)
            .ok_or_else(|| {
                PropertyError::malformed(
                    "domainRealm",
                    record.path.as_str(),
                    "realm binding paths end in '/realm'",
                )
            })?;

        let mut binding = Self::new(parent);
        binding.apply(&record.properties)?;
        Ok(binding)
    }
}
