//! Native authentication singletons.
//!
//! Three singleton records control logins that do not go through a named
//! auth domain: the native policy record at `sys/auth-realm`, the default
//! login realm at `sys/auth-realm/default-auth`, and the console login
//! realm at `sys/auth-realm/console-auth`. There is exactly one record per
//! fixed path, so creation and modification are the same operation.
//!
//! Absent optional fields are omitted from the rendered properties and
//! left at the remote default, never forced to empty.

use serde::{Deserialize, Serialize};

use crate::path::ObjectPath;
use crate::property::{parse_u32, PropertyError, PropertyMap};
use crate::realm::AuthRealm;
use crate::record::{ManagedObject, Record};

/// The native authentication policy record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeAuthRealm {
    /// Role policy for remote users without a locally assigned role.
    pub def_role_policy: Option<String>,
    /// Default login behaviour.
    pub def_login: Option<String>,
    /// Console login behaviour.
    pub con_login: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied after the named fields.
    pub extra: PropertyMap,
}

impl NativeAuthRealm {
    /// Creates an empty policy record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default role policy.
    #[must_use]
    pub fn with_def_role_policy(mut self, policy: impl Into<String>) -> Self {
        self.def_role_policy = Some(policy.into());
        self
    }

    /// Sets the default login behaviour.
    #[must_use]
    pub fn with_def_login(mut self, login: impl Into<String>) -> Self {
        self.def_login = Some(login.into());
        self
    }

    /// Sets the console login behaviour.
    #[must_use]
    pub fn with_con_login(mut self, login: impl Into<String>) -> Self {
        self.con_login = Some(login.into());
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

impl ManagedObject for NativeAuthRealm {
    fn class_id(&self) -> &'static str {
        "nativeAuth"
    }

    fn path(&self) -> ObjectPath {
        ObjectPath::auth_realm()
    }

    fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        if let Some(ref policy) = self.def_role_policy {
            props.insert("defRolePolicy", policy);
        }
        if let Some(ref login) = self.def_login {
            props.insert("defLogin", login);
        }
        if let Some(ref login) = self.con_login {
            props.insert("conLogin", login);
        }
        if let Some(ref descr) = self.descr {
            props.insert("descr", descr);
        }
        props.merge(&self.extra);
        props
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<(), PropertyError> {
        match key {
            "defRolePolicy" => self.def_role_policy = Some(value.to_string()),
            "defLogin" => self.def_login = Some(value.to_string()),
            "conLogin" => self.con_login = Some(value.to_string()),
            "descr" => self.descr = Some(value.to_string()),
            _ => {
                self.extra.insert(key, value);
            }
        }
        Ok(())
    }
}

impl TryFrom<&Record> for NativeAuthRealm {
    type Error = PropertyError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut policy = Self::new();
        policy.apply(&record.properties)?;
        Ok(policy)
    }
}

/// The default login realm record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultAuthRealm {
    /// Selected authentication backend.
    pub realm: Option<AuthRealm>,
    /// Web session timeout in seconds.
    pub session_timeout: Option<u32>,
    /// Login refresh period in seconds.
    pub refresh_period: Option<u32>,
    /// Provider group consulted by the backend.
    pub provider_group: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied after the named fields.
    pub extra: PropertyMap,
}

impl DefaultAuthRealm {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the authentication backend.
    #[must_use]
    pub const fn with_realm(mut self, realm: AuthRealm) -> Self {
        self.realm = Some(realm);
        self
    }

    /// Sets the session timeout.
    #[must_use]
    pub const fn with_session_timeout(mut self, seconds: u32) -> Self {
        self.session_timeout = Some(seconds);
        self
    }

    /// Sets the refresh period.
    #[must_use]
    pub const fn with_refresh_period(mut self, seconds: u32) -> Self {
        self.refresh_period = Some(seconds);
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

impl ManagedObject for DefaultAuthRealm {
    fn class_id(&self) -> &'static str {
        "defaultAuth"
    }

    fn path(&self) -> ObjectPath {
        ObjectPath::auth_realm().child("default-auth")
    }

    fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        if let Some(realm) = self.realm {
            props.insert("realm", realm.as_str());
        }
        if let Some(seconds) = self.session_timeout {
            props.insert("sessionTimeout", seconds.to_string());
        }
        if let Some(seconds) = self.refresh_period {
            props.insert("refreshPeriod", seconds.to_string());
        }
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
            "realm" => self.realm = Some(value.parse()?),
            "sessionTimeout" => self.session_timeout = Some(parse_u32(key, value)?),
            "refreshPeriod" => self.refresh_period = Some(parse_u32(key, value)?),
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

impl TryFrom<&Record> for DefaultAuthRealm {
    type Error = PropertyError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut realm = Self::new();
        realm.apply(&record.properties)?;
        Ok(realm)
    }
}

/// The console login realm record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleAuthRealm {
    /// Selected authentication backend.
    pub realm: Option<AuthRealm>,
    /// Provider group consulted by the backend.
    pub provider_group: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied after the named fields.
    pub extra: PropertyMap,
}

impl ConsoleAuthRealm {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the authentication backend.
    #[must_use]
    pub const fn with_realm(mut self, realm: AuthRealm) -> Self {
        self.realm = Some(realm);
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

impl ManagedObject for ConsoleAuthRealm {
    fn class_id(&self) -> &'static str {
        "consoleAuth"
    }

    fn path(&self) -> ObjectPath {
        ObjectPath::auth_realm().child("console-auth")
    }

    fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        if let Some(realm) = self.realm {
            props.insert("realm", realm.as_str());
        }
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
            "realm" => self.realm = Some(value.parse()?),
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

impl TryFrom<&Record> for ConsoleAuthRealm {
    type Error = PropertyError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        let mut realm = Self::new();
        realm.apply(&record.properties)?;
        Ok(realm)
    }
}
