use std::path::Path;

use anyhow::Context;
use fintel_auth::{GoTrueClient, SessionStore, TokenStore};
use fintel_config::{DatabaseConfig, FintelConfig};
use fintel_core::identity::AuthIdentity;
use fintel_db::service::FintelService;

/// Resources shared by every command, created at start-up and closed with
/// [`AppContext::shutdown`].
pub struct AppContext {
    pub config: FintelConfig,
    pub service: FintelService,
    /// `None` when no auth endpoint is configured.
    pub session: Option<SessionStore<GoTrueClient>>,
}

impl AppContext {
    /// Recover the stored session, then open the database scoped to it.
    pub async fn init(config: FintelConfig) -> anyhow::Result<Self> {
        let mut session = build_session_store(&config);
        if let Some(store) = session.as_mut() {
            let state = store.init().await;
            tracing::debug!(?state, "session recovered");
        }
        let identity = session.as_ref().and_then(SessionStore::identity);

        let service = open_service(&config.database, identity).await?;
        Ok(Self {
            config,
            service,
            session,
        })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.service.identity().is_some()
    }

    /// Drop the session store and database connection.
    pub fn shutdown(self) {
        let Self {
            service, session, ..
        } = self;
        tracing::debug!(
            remote = service.db().is_remote(),
            signed_in = session.as_ref().is_some_and(|s| s.session().is_some()),
            "closing application context"
        );
        drop(session);
        drop(service);
    }
}

/// Session store for the configured auth endpoint, or `None` without one.
///
/// Sessions persist through the system token store unless
/// `auth.persist_session` is off.
#[must_use]
pub fn build_session_store(config: &FintelConfig) -> Option<SessionStore<GoTrueClient>> {
    let auth = config.require_auth().ok()?;
    let tokens = if auth.persist_session {
        TokenStore::system()
    } else {
        TokenStore::disabled()
    };
    Some(SessionStore::new(
        GoTrueClient::from_config(auth),
        tokens,
        auth.auto_refresh_token,
    ))
}

async fn open_service(
    database: &DatabaseConfig,
    identity: Option<AuthIdentity>,
) -> anyhow::Result<FintelService> {
    if database.is_remote() {
        return FintelService::new_remote(&database.url, &database.auth_token, identity)
            .await
            .with_context(|| format!("failed to connect to {}", database.url));
    }

    ensure_parent_dir(Path::new(&database.local_path))?;
    FintelService::new_local(&database.local_path, identity)
        .await
        .with_context(|| format!("failed to open {}", database.local_path))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fintel_config::AuthConfig;

    use super::*;

    fn local_config(dir: &Path) -> FintelConfig {
        let mut config = FintelConfig::default();
        config.database.local_path = dir
            .join("nested")
            .join("fintel.db")
            .to_string_lossy()
            .into_owned();
        config
    }

    #[tokio::test]
    async fn init_creates_local_database_without_auth() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::init(local_config(dir.path())).await.unwrap();

        assert!(ctx.session.is_none());
        assert!(!ctx.is_authenticated());
        assert!(dir.path().join("nested").join("fintel.db").exists());
        ctx.shutdown();
    }

    #[test]
    fn session_store_needs_auth_endpoint() {
        let mut config = FintelConfig::default();
        assert!(build_session_store(&config).is_none());

        config.auth = AuthConfig {
            url: "https://auth.example.com".into(),
            anon_key: "anon".into(),
            persist_session: false,
            ..AuthConfig::default()
        };
        let store = build_session_store(&config).unwrap();
        assert!(store.session().is_none());
        assert!(store.token_store().load().is_none());
    }
}
