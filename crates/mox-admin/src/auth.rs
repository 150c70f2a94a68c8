//! Authentication configuration operations.
//!
//! Every operation issues at most one read round trip and one
//! write-plus-commit round trip through the session handle; no operation
//! spans multiple commits.

use mox_model::{
    AuthDomain, ConsoleAuthRealm, DefaultAuthRealm, DomainRealmBinding, ManagedObject,
    NativeAuthRealm, ObjectPath, PropertyMap,
};
use mox_session::Session;

use crate::error::{OperationError, OperationResult};
use crate::request::{
    ConfigureConsoleAuth, ConfigureDefaultAuth, ConfigureNativeAuth, ConfigureRealmBinding,
};

/// Fetches a domain, reporting the public operation's name on failure.
async fn fetch_domain(
    session: &impl Session,
    name: &str,
    operation: &'static str,
) -> OperationResult<AuthDomain> {
    let path = ObjectPath::auth_domain(name);
    let record = session
        .query_by_path(&path)
        .await?
        .ok_or_else(|| OperationError::not_found(operation, "auth domain", path.as_str()))?;
    Ok(AuthDomain::try_from(&record)?)
}

/// Gets the auth domain with the given name.
///
/// Read-only; no commit.
///
/// ## Errors
///
/// Returns [`OperationError::NotFound`] when no record exists at the
/// domain's deterministic path.
pub async fn auth_domain_get(session: &impl Session, name: &str) -> OperationResult<AuthDomain> {
    fetch_domain(session, name, "auth_domain_get").await
}

/// Checks whether an auth domain exists and matches the expected
/// properties.
///
/// A not-found lookup downgrades to `(false, None)` instead of
/// propagating — the only place the façade swallows a missing record.
/// Every key of `expected` must match the fetched record's rendered
/// properties for `(true, Some(domain))`.
///
/// ## Errors
///
/// Returns session failures unchanged.
pub async fn auth_domain_exists(
    session: &impl Session,
    name: &str,
    expected: &PropertyMap,
) -> OperationResult<(bool, Option<AuthDomain>)> {
    let domain = match fetch_domain(session, name, "auth_domain_exists").await {
        Ok(domain) => domain,
        Err(err) if err.is_not_found() => return Ok((false, None)),
        Err(err) => return Err(err),
    };

    if domain.matches(expected) {
        Ok((true, Some(domain)))
    } else {
        Ok((false, None))
    }
}

/// Creates an auth domain, overwriting any record already at its path.
///
/// The upsert makes re-running provisioning against a partially
/// configured system safe: a second create with the same name never
/// fails and never duplicates.
///
/// ## Errors
///
/// Returns session failures unchanged.
pub async fn auth_domain_create(
    session: &impl Session,
    domain: &AuthDomain,
) -> OperationResult<AuthDomain> {
    tracing::debug!("creating auth domain at '{}'", domain.path());
    session.add_record(domain.to_record(), true).await?;
    session.commit().await?;
    Ok(domain.clone())
}

/// Modifies an existing auth domain by merging properties into it.
///
/// Modify never creates: a missing domain is an error, so a typoed name
/// fails instead of silently materialising a new record.
///
/// ## Errors
///
/// Returns [`OperationError::NotFound`] when the domain does not exist,
/// [`PropertyError`](mox_model::PropertyError) when a recognized property
/// rejects its value, and session failures unchanged.
pub async fn auth_domain_modify(
    session: &impl Session,
    name: &str,
    props: &PropertyMap,
) -> OperationResult<AuthDomain> {
    let mut domain = fetch_domain(session, name, "auth_domain_modify").await?;
    domain.apply(props)?;

    tracing::debug!("updating auth domain at '{}'", domain.path());
    session.update_record(domain.to_record()).await?;
    session.commit().await?;
    Ok(domain)
}

/// Deletes an existing auth domain.
///
/// ## Errors
///
/// Returns [`OperationError::NotFound`] when the domain does not exist,
/// and session failures unchanged.
pub async fn auth_domain_delete(session: &impl Session, name: &str) -> OperationResult<()> {
    let domain = fetch_domain(session, name, "auth_domain_delete").await?;

    tracing::debug!("removing auth domain at '{}'", domain.path());
    session.remove_record(domain.to_record()).await?;
    session.commit().await?;
    Ok(())
}

/// Configures the realm binding of an auth domain.
///
/// The parent domain is resolved first; a missing parent fails before
/// any child record is submitted.
///
/// ## Errors
///
/// Returns [`OperationError::NotFound`] when the parent domain does not
/// exist, and session failures unchanged.
pub async fn auth_domain_realm_configure(
    session: &impl Session,
    domain_name: &str,
    request: ConfigureRealmBinding,
) -> OperationResult<DomainRealmBinding> {
    let parent = fetch_domain(session, domain_name, "auth_domain_realm_configure").await?;
    let binding = request.into_binding(parent.path())?;

    tracing::debug!("configuring realm binding at '{}'", binding.path());
    session.update_record(binding.to_record()).await?;
    session.commit().await?;
    Ok(binding)
}

/// Configures native authentication at its fixed path.
///
/// Unconditional upsert: there is exactly one record per fixed path, so
/// creation and modification are the same operation.
///
/// ## Errors
///
/// Returns session failures unchanged.
pub async fn native_auth_configure(
    session: &impl Session,
    request: ConfigureNativeAuth,
) -> OperationResult<NativeAuthRealm> {
    let policy = request.into_policy()?;

    tracing::debug!("configuring native auth at '{}'", policy.path());
    session.update_record(policy.to_record()).await?;
    session.commit().await?;
    Ok(policy)
}

/// Configures the default login realm at its fixed path.
///
/// ## Errors
///
/// Returns session failures unchanged.
pub async fn native_auth_default(
    session: &impl Session,
    request: ConfigureDefaultAuth,
) -> OperationResult<DefaultAuthRealm> {
    let realm = request.into_policy()?;

    tracing::debug!("configuring default auth at '{}'", realm.path());
    session.update_record(realm.to_record()).await?;
    session.commit().await?;
    Ok(realm)
}

/// Configures the console login realm at its fixed path.
///
/// ## Errors
///
/// Returns session failures unchanged.
pub async fn native_auth_console(
    session: &impl Session,
    request: ConfigureConsoleAuth,
) -> OperationResult<ConsoleAuthRealm> {
    let realm = request.into_policy()?;

    tracing::debug!("configuring console auth at '{}'", realm.path());
    session.update_record(realm.to_record()).await?;
    session.commit().await?;
    Ok(realm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mox_session::MemorySession;

    #[tokio::test]
    async fn get_reports_calling_operation() {
        let session = MemorySession::new();
        let err = auth_domain_get(&session, "ghost").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("auth_domain_get"));
    }

    #[tokio::test]
    async fn modify_reports_its_own_operation_name() {
        let session = MemorySession::new();
        let err = auth_domain_modify(&session, "ghost", &PropertyMap::new())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("auth_domain_modify"));
    }

    #[tokio::test]
    async fn exists_downgrades_not_found() {
        let session = MemorySession::new();
        let (found, domain) = auth_domain_exists(&session, "ghost", &PropertyMap::new())
            .await
            .unwrap();

        assert!(!found);
        assert!(domain.is_none());
    }

    #[tokio::test]
    async fn create_returns_submitted_record() {
        let session = MemorySession::new();
        let created = auth_domain_create(&session, &AuthDomain::new("d1").with_descr("lab"))
            .await
            .unwrap();

        assert_eq!(created.descr.as_deref(), Some("lab"));
        assert_eq!(session.record_count(), 1);
    }
}
