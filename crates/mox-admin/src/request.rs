//! Request types for the configuration operations.
//!
//! Each request carries an operation's named parameters with their
//! defaults, plus an extension [`PropertyMap`] applied last (the map wins
//! on key collision with a named field). Requests are serde round-trippable
//! so higher-level tooling can load them from declarative configuration.

use serde::{Deserialize, Serialize};

use mox_model::{
    AuthRealm, ConsoleAuthRealm, DefaultAuthRealm, DomainRealmBinding, ManagedObject,
    NativeAuthRealm, ObjectPath, PropertyError, PropertyMap,
};

/// Parameters for [`auth_domain_realm_configure`](crate::auth_domain_realm_configure).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigureRealmBinding {
    /// Authentication backend (default `local`).
    pub realm: AuthRealm,
    /// Two-factor requirement (default off).
    pub use_two_factor: bool,
    /// Provider group consulted by the backend.
    pub provider_group: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied last.
    pub extra: PropertyMap,
}

impl ConfigureRealmBinding {
    /// Creates a request with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Builds the binding record under the given domain path.
    ///
    /// ## Errors
    ///
    /// Returns [`PropertyError`] when an extension entry for a named
    /// field rejects its value.
    pub fn into_binding(self, parent: ObjectPath) -> Result<DomainRealmBinding, PropertyError> {
        let mut binding = DomainRealmBinding::new(parent)
            .with_realm(self.realm)
            .with_two_factor(self.use_two_factor);
        binding.provider_group = self.provider_group;
        binding.name = self.name;
        binding.descr = self.descr;
        binding.apply(&self.extra)?;
        Ok(binding)
    }
}

/// Parameters for [`native_auth_configure`](crate::native_auth_configure).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigureNativeAuth {
    /// Role policy for remote users without a locally assigned role.
    pub def_role_policy: Option<String>,
    /// Default login behaviour.
    pub def_login: Option<String>,
    /// Console login behaviour.
    pub con_login: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied last.
    pub extra: PropertyMap,
}

impl ConfigureNativeAuth {
    /// Creates an empty request.
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

    /// Builds the native policy record. Fields left unset are omitted,
    /// not forced to empty.
    ///
    /// ## Errors
    ///
    /// Returns [`PropertyError`] when an extension entry for a named
    /// field rejects its value.
    pub fn into_policy(self) -> Result<NativeAuthRealm, PropertyError> {
        let mut policy = NativeAuthRealm::new();
        policy.def_role_policy = self.def_role_policy;
        policy.def_login = self.def_login;
        policy.con_login = self.con_login;
        policy.descr = self.descr;
        policy.apply(&self.extra)?;
        Ok(policy)
    }
}

/// Parameters for [`native_auth_default`](crate::native_auth_default).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigureDefaultAuth {
    /// Authentication backend.
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
    /// Extension properties, applied last.
    pub extra: PropertyMap,
}

impl ConfigureDefaultAuth {
    /// Creates an empty request.
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

    /// Builds the default login realm record.
    ///
    /// ## Errors
    ///
    /// Returns [`PropertyError`] when an extension entry for a named
    /// field rejects its value.
    pub fn into_policy(self) -> Result<DefaultAuthRealm, PropertyError> {
        let mut realm = DefaultAuthRealm::new();
        realm.realm = self.realm;
        realm.session_timeout = self.session_timeout;
        realm.refresh_period = self.refresh_period;
        realm.provider_group = self.provider_group;
        realm.name = self.name;
        realm.descr = self.descr;
        realm.apply(&self.extra)?;
        Ok(realm)
    }
}

/// Parameters for [`native_auth_console`](crate::native_auth_console).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigureConsoleAuth {
    /// Authentication backend.
    pub realm: Option<AuthRealm>,
    /// Provider group consulted by the backend.
    pub provider_group: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub descr: Option<String>,
    /// Extension properties, applied last.
    pub extra: PropertyMap,
}

impl ConfigureConsoleAuth {
    /// Creates an empty request.
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

    /// Builds the console login realm record.
    ///
    /// ## Errors
    ///
    /// Returns [`PropertyError`] when an extension entry for a named
    /// field rejects its value.
    pub fn into_policy(self) -> Result<ConsoleAuthRealm, PropertyError> {
        let mut realm = ConsoleAuthRealm::new();
        realm.realm = self.realm;
        realm.provider_group = self.provider_group;
        realm.name = self.name;
        realm.descr = self.descr;
        realm.apply(&self.extra)?;
        Ok(realm)
    }
}
