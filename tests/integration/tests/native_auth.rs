//! Realm binding and native authentication tests.

use mox_admin::{
    auth_domain_realm_configure, native_auth_configure, native_auth_console, native_auth_default,
    ConfigureConsoleAuth, ConfigureDefaultAuth, ConfigureNativeAuth, ConfigureRealmBinding,
};
use mox_model::{AuthDomain, AuthRealm, ManagedObject, ObjectPath};
use mox_session::Session;

use crate::common;

#[tokio::test]
async fn realm_configure_missing_domain_submits_nothing() {
    let session = common::session();

    let err = auth_domain_realm_configure(&session, "missing-domain", ConfigureRealmBinding::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(session.staged_len(), 0);
    assert_eq!(session.record_count(), 0);
}

#[tokio::test]
async fn realm_configure_defaults_to_local_without_two_factor() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1")).await?;

    let binding =
        auth_domain_realm_configure(&session, "d1", ConfigureRealmBinding::new()).await?;

    assert_eq!(binding.realm, AuthRealm::Local);
    assert_eq!(binding.properties().get("use2Factor"), Some("no"));
    Ok(())
}

#[tokio::test]
async fn realm_configure_renders_two_factor_as_yes() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1")).await?;

    let request = ConfigureRealmBinding::new()
        .with_realm(AuthRealm::Ldap)
        .with_two_factor(true)
        .with_provider_group("corp");
    auth_domain_realm_configure(&session, "d1", request).await?;

    let path = ObjectPath::auth_domain("d1").child("realm");
    let stored = session.query_by_path(&path).await?.expect("binding committed");
    assert_eq!(stored.property("use2Factor"), Some("yes"));
    assert_eq!(stored.property("realm"), Some("ldap"));
    assert_eq!(stored.property("providerGroup"), Some("corp"));
    Ok(())
}

#[tokio::test]
async fn native_auth_configure_upserts_at_fixed_path() -> anyhow::Result<()> {
    let session = common::session();

    let request = ConfigureNativeAuth::new()
        .with_def_role_policy("assign-default-role")
        .with_con_login("local");
    native_auth_configure(&session, request).await?;

    let stored = session
        .query_by_path(&ObjectPath::auth_realm())
        .await?
        .expect("policy committed");
    assert_eq!(stored.property("defRolePolicy"), Some("assign-default-role"));
    assert_eq!(stored.property("conLogin"), Some("local"));
    assert_eq!(stored.property("defLogin"), None);
    Ok(())
}

#[tokio::test]
async fn native_auth_reconfigure_merges_fields() -> anyhow::Result<()> {
    let session = common::session();

    native_auth_configure(&session, ConfigureNativeAuth::new().with_def_login("local")).await?;
    native_auth_configure(&session, ConfigureNativeAuth::new().with_con_login("ldap")).await?;

    let stored = session
        .query_by_path(&ObjectPath::auth_realm())
        .await?
        .expect("policy committed");
    assert_eq!(stored.property("defLogin"), Some("local"));
    assert_eq!(stored.property("conLogin"), Some("ldap"));
    assert_eq!(session.record_count(), 1);
    Ok(())
}

#[tokio::test]
async fn default_auth_lives_at_its_fixed_path() -> anyhow::Result<()> {
    let session = common::session();

    let request = ConfigureDefaultAuth::new()
        .with_realm(AuthRealm::Radius)
        .with_session_timeout(1000);
    native_auth_default(&session, request).await?;

    let path = ObjectPath::auth_realm().child("default-auth");
    let stored = session.query_by_path(&path).await?.expect("realm committed");
    assert_eq!(stored.property("realm"), Some("radius"));
    assert_eq!(stored.property("sessionTimeout"), Some("1000"));
    Ok(())
}

#[tokio::test]
async fn console_auth_lives_at_its_fixed_path() -> anyhow::Result<()> {
    let session = common::session();

    native_auth_console(&session, ConfigureConsoleAuth::new().with_realm(AuthRealm::None)).await?;

    let path = ObjectPath::auth_realm().child("console-auth");
    let stored = session.query_by_path(&path).await?.expect("realm committed");
    assert_eq!(stored.property("realm"), Some("none"));
    Ok(())
}

#[tokio::test]
async fn realm_binding_keeps_domain_record_separate() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1")).await?;

    auth_domain_realm_configure(
        &session,
        "d1",
        ConfigureRealmBinding::new().with_realm(AuthRealm::Tacacs),
    )
    .await?;

    // Domain and binding are distinct records.
    assert_eq!(session.record_count(), 2);
    let domain = session
        .query_by_path(&ObjectPath::auth_domain("d1"))
        .await?
        .expect("domain committed");
    assert_eq!(domain.property("realm"), None);
    Ok(())
}
