//! The session store: the only writer of session state.
//!
//! ```text
//!            init / sign_in / events
//! Loading ──────────────────────────► Authenticated(user)
//!    │                                   │       ▲
//!    │ nothing stored / refresh failed   │       │ SignedIn, TokenRefreshed,
//!    ▼                                   ▼       │ UserUpdated
//! Unauthenticated ◄──────── SignedOut / sign_out
//! ```
//!
//! Consumers hold a [`watch::Receiver`] and never write.

use tokio::sync::watch;

use fintel_core::identity::AuthIdentity;

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::session::{AuthEvent, AuthSession, AuthUser, SessionState, SignUpOutcome};
use crate::token_store::TokenStore;

/// A stored session this close to expiry is refreshed during recovery.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

pub struct SessionStore<B> {
    backend: B,
    tokens: TokenStore,
    auto_refresh: bool,
    session: Option<AuthSession>,
    state: watch::Sender<SessionState>,
}

impl<B: AuthBackend> SessionStore<B> {
    /// New store in the `Loading` state. Call [`Self::init`] to recover a
    /// persisted session.
    #[must_use]
    pub fn new(backend: B, tokens: TokenStore, auto_refresh: bool) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            backend,
            tokens,
            auto_refresh,
            session: None,
            state,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn identity(&self) -> Option<AuthIdentity> {
        self.session.as_ref().map(|s| s.user.identity())
    }

    #[must_use]
    pub const fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Recover the persisted session. Never fails: anything unusable ends
    /// in `Unauthenticated`.
    pub async fn init(&mut self) -> SessionState {
        self.state.send_replace(SessionState::Loading);

        let Some(stored) = self.tokens.load() else {
            self.set_signed_out();
            return self.state();
        };

        if stored.is_near_expiry(EXPIRY_BUFFER_SECS) {
            if self.auto_refresh {
                match self.backend.refresh(&stored.refresh_token).await {
                    Ok(session) => self.set_signed_in(session),
                    Err(error) => {
                        tracing::warn!(%error, "stored session could not be refreshed");
                        self.clear_persisted();
                        self.set_signed_out();
                    }
                }
                return self.state();
            }
            if stored.is_expired() {
                tracing::debug!("stored session expired");
                self.clear_persisted();
                self.set_signed_out();
                return self.state();
            }
        }

        self.session = Some(stored.clone());
        self.state
            .send_replace(SessionState::Authenticated(stored.user));
        self.state()
    }

    /// Apply an auth-state change.
    pub fn handle_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session)
            | AuthEvent::TokenRefreshed(session)
            | AuthEvent::UserUpdated(session) => self.set_signed_in(session),
            AuthEvent::SignedOut => {
                self.clear_persisted();
                self.set_signed_out();
            }
            AuthEvent::PasswordRecovery => {}
        }
    }

    /// Register. Signs in only if the service returned a session.
    ///
    /// # Errors
    ///
    /// Returns the service's error unchanged.
    pub async fn sign_up(&mut self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.backend.sign_up(email, password).await?;
        if let Some(session) = &outcome.session {
            self.handle_event(AuthEvent::SignedIn(session.clone()));
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns the service's error unchanged; state is left as it was.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let session = self.backend.sign_in(email, password).await?;
        let user = session.user.clone();
        self.handle_event(AuthEvent::SignedIn(session));
        Ok(user)
    }

    /// Sign out. Local state always ends `Unauthenticated`; a failed
    /// server-side revoke is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns the service's error from the revoke call.
    pub async fn sign_out(&mut self) -> Result<(), AuthError> {
        let result = match &self.session {
            Some(session) => self.backend.sign_out(&session.access_token).await,
            None => Ok(()),
        };
        self.handle_event(AuthEvent::SignedOut);
        result
    }

    /// Ask the service to e-mail a password-reset link.
    ///
    /// # Errors
    ///
    /// Returns the service's error unchanged.
    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.backend.recover(email).await
    }

    /// Exchange the refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session, or the
    /// service's error (state is left as it was).
    pub async fn refresh(&mut self) -> Result<AuthUser, AuthError> {
        let refresh_token = self
            .session
            .as_ref()
            .map(|s| s.refresh_token.clone())
            .ok_or(AuthError::NotAuthenticated)?;
        let session = self.backend.refresh(&refresh_token).await?;
        let user = session.user.clone();
        self.handle_event(AuthEvent::TokenRefreshed(session));
        Ok(user)
    }

    /// Ask the service who the current access token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session.
    pub async fn fetch_user(&self) -> Result<AuthUser, AuthError> {
        let session = self.session.as_ref().ok_or(AuthError::NotAuthenticated)?;
        self.backend.get_user(&session.access_token).await
    }

    fn set_signed_in(&mut self, session: AuthSession) {
        if let Err(error) = self.tokens.save(&session) {
            tracing::warn!(%error, "session not persisted");
        }
        let user = session.user.clone();
        self.session = Some(session);
        self.state.send_replace(SessionState::Authenticated(user));
    }

    fn set_signed_out(&mut self) {
        self.session = None;
        self.state.send_replace(SessionState::Unauthenticated);
    }

    fn clear_persisted(&self) {
        if let Err(error) = self.tokens.clear() {
            tracing::warn!(%error, "stored session not cleared");
        }
    }
}
