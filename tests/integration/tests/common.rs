//! Common test utilities and fixtures.

use mox_admin::auth_domain_create;
use mox_model::AuthDomain;
use mox_session::MemorySession;

/// Creates a fresh in-memory session with tracing initialized.
pub fn session() -> MemorySession {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mox_admin=debug,mox_session=debug")
        .try_init();

    MemorySession::new()
}

/// Creates a session holding one committed auth domain.
pub async fn session_with_domain(domain: &AuthDomain) -> anyhow::Result<MemorySession> {
    let session = session();
    auth_domain_create(&session, domain).await?;
    Ok(session)
}
