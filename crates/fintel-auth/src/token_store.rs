//! Session persistence.
//!
//! Load order: `FINTEL_AUTH__SESSION` env → keyring → file
//! (`~/.fintel/session.json`). Saves go to the keyring and fall back to the
//! file (mode `0600`) when no keyring is available.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::AuthSession;

const DEFAULT_KEYRING_SERVICE: &str = "fintel-cli";
const KEYRING_USER: &str = "auth-session";
const SESSION_FILE_NAME: &str = "session.json";
const SESSION_ENV_VAR: &str = "FINTEL_AUTH__SESSION";

/// Where a loaded session came from (for `fintel auth status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    keyring_service: Option<String>,
    env_var: Option<&'static str>,
    file_path: Option<PathBuf>,
}

impl TokenStore {
    /// Keyring, env override and `~/.fintel/session.json`.
    ///
    /// The keyring service defaults to `"fintel-cli"`; override it with
    /// `FINTEL_KEYRING_SERVICE` to keep test runs away from real credentials.
    #[must_use]
    pub fn system() -> Self {
        Self {
            keyring_service: Some(
                std::env::var("FINTEL_KEYRING_SERVICE")
                    .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string()),
            ),
            env_var: Some(SESSION_ENV_VAR),
            file_path: dirs::home_dir().map(|h| h.join(".fintel").join(SESSION_FILE_NAME)),
        }
    }

    /// File storage only, at an explicit path.
    #[must_use]
    pub const fn file_only(path: PathBuf) -> Self {
        Self {
            keyring_service: None,
            env_var: None,
            file_path: Some(path),
        }
    }

    /// Stores nothing. Used when `auth.persist_session` is off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            keyring_service: None,
            env_var: None,
            file_path: None,
        }
    }

    /// Persist a session. Falls back to file if the keyring is unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if every configured tier fails.
    pub fn save(&self, session: &AuthSession) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;

        if let Some(service) = &self.keyring_service {
            match keyring::Entry::new(service, KEYRING_USER).and_then(|e| e.set_password(&json)) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        match &self.file_path {
            Some(path) => store_file(path, &json),
            None if self.keyring_service.is_some() => Err(AuthError::TokenStoreError(
                "home directory not found: cannot store session".into(),
            )),
            None => Ok(()),
        }
    }

    /// Load the persisted session, if any tier holds a readable one.
    #[must_use]
    pub fn load(&self) -> Option<AuthSession> {
        self.load_with_source().map(|(session, _)| session)
    }

    #[must_use]
    pub fn source(&self) -> Option<TokenSource> {
        self.load_with_source().map(|(_, source)| source)
    }

    /// Remove the session from every tier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the session file cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Some(service) = &self.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
        {
            // Missing entries are fine.
            let _ = entry.delete_credential();
        }
        if let Some(path) = &self.file_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn load_with_source(&self) -> Option<(AuthSession, TokenSource)> {
        if let Some(var) = self.env_var
            && let Ok(json) = std::env::var(var)
            && let Some(session) = parse(&json, "env")
        {
            return Some((session, TokenSource::Env));
        }

        if let Some(service) = &self.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
            && let Ok(json) = entry.get_password()
            && let Some(session) = parse(&json, "keyring")
        {
            return Some((session, TokenSource::Keyring));
        }

        let path = self.file_path.as_ref()?;
        let json = fs::read_to_string(path).ok()?;
        parse(&json, "file").map(|session| (session, TokenSource::File))
    }
}

fn parse(json: &str, tier: &str) -> Option<AuthSession> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(tier, %error, "ignoring unreadable stored session");
            None
        }
    }
}

fn store_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}
