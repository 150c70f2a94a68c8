//! Auth domain lifecycle tests.

use mox_admin::{
    auth_domain_create, auth_domain_delete, auth_domain_exists, auth_domain_get,
    auth_domain_modify,
};
use mox_model::{AuthDomain, PropertyMap};

use crate::common;

#[tokio::test]
async fn get_missing_domain_fails() {
    let session = common::session();

    let err = auth_domain_get(&session, "missing-domain").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("sys/auth-realm/domain-missing-domain"));
}

#[tokio::test]
async fn exists_missing_domain_is_false() -> anyhow::Result<()> {
    let session = common::session();

    let (found, domain) = auth_domain_exists(&session, "missing-domain", &PropertyMap::new()).await?;
    assert!(!found);
    assert!(domain.is_none());
    Ok(())
}

#[tokio::test]
async fn create_then_get_preserves_defaults() -> anyhow::Result<()> {
    let session = common::session();

    auth_domain_create(&session, &AuthDomain::new("d1")).await?;
    let fetched = auth_domain_get(&session, "d1").await?;

    assert_eq!(fetched.refresh_period, 600);
    assert_eq!(fetched.session_timeout, 7200);
    Ok(())
}

#[tokio::test]
async fn create_twice_overwrites_without_duplicating() -> anyhow::Result<()> {
    let session = common::session();
    let domain = AuthDomain::new("d1").with_session_timeout(1000);

    auth_domain_create(&session, &domain).await?;
    auth_domain_create(&session, &domain).await?;

    assert_eq!(session.record_count(), 1);
    let fetched = auth_domain_get(&session, "d1").await?;
    assert_eq!(fetched.session_timeout, 1000);
    Ok(())
}

#[tokio::test]
async fn modify_missing_domain_fails_without_side_effects() {
    let session = common::session();
    let props = PropertyMap::new().set("sessionTimeout", "1000");

    let err = auth_domain_modify(&session, "missing-domain", &props).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(session.record_count(), 0);
}

#[tokio::test]
async fn modify_merges_properties() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1").with_descr("lab")).await?;
    let props = PropertyMap::new().set("sessionTimeout", "1000").set("vendorKey", "x");

    let modified = auth_domain_modify(&session, "d1", &props).await?;
    assert_eq!(modified.session_timeout, 1000);

    let fetched = auth_domain_get(&session, "d1").await?;
    assert_eq!(fetched.session_timeout, 1000);
    assert_eq!(fetched.descr.as_deref(), Some("lab"));
    assert_eq!(fetched.extra.get("vendorKey"), Some("x"));
    Ok(())
}

#[tokio::test]
async fn modify_rejects_malformed_seconds() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1")).await?;
    let props = PropertyMap::new().set("sessionTimeout", "soon");

    let err = auth_domain_modify(&session, "d1", &props).await.unwrap_err();
    assert!(err.to_string().contains("soon"));

    // Nothing was submitted.
    let fetched = auth_domain_get(&session, "d1").await?;
    assert_eq!(fetched.session_timeout, 7200);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_fails() -> anyhow::Result<()> {
    let session = common::session_with_domain(&AuthDomain::new("d1")).await?;

    auth_domain_delete(&session, "d1").await?;
    assert!(auth_domain_get(&session, "d1").await.unwrap_err().is_not_found());
    assert_eq!(session.record_count(), 0);
    Ok(())
}

#[tokio::test]
async fn delete_missing_domain_fails() {
    let session = common::session();

    let err = auth_domain_delete(&session, "missing-domain").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("auth_domain_delete"));
}

#[tokio::test]
async fn exists_compares_expected_properties() -> anyhow::Result<()> {
    let session =
        common::session_with_domain(&AuthDomain::new("d1").with_session_timeout(1000)).await?;

    let expected = PropertyMap::new().set("sessionTimeout", "1000");
    let (found, domain) = auth_domain_exists(&session, "d1", &expected).await?;
    assert!(found);
    assert_eq!(domain.unwrap().session_timeout, 1000);

    // The record exists, but the property differs.
    let expected = PropertyMap::new().set("sessionTimeout", "2000");
    let (found, domain) = auth_domain_exists(&session, "d1", &expected).await?;
    assert!(!found);
    assert!(domain.is_none());
    Ok(())
}

#[tokio::test]
async fn extension_map_wins_over_named_field() -> anyhow::Result<()> {
    let session = common::session();
    let domain = AuthDomain::new("d1")
        .with_session_timeout(1000)
        .with_property("sessionTimeout", "2000");

    auth_domain_create(&session, &domain).await?;
    let fetched = auth_domain_get(&session, "d1").await?;

    assert_eq!(fetched.session_timeout, 2000);
    Ok(())
}
