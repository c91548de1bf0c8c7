//! Session data and the states a session store moves through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fintel_core::identity::AuthIdentity;

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthUser {
    #[must_use]
    pub fn identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}

/// Tokens for one signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl AuthSession {
    /// True when the access token expires within `buffer_secs`, or already has.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at - chrono::Duration::seconds(buffer_secs) <= Utc::now()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_near_expiry(0)
    }
}

/// What the rest of the application sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Initial recovery has not finished.
    Loading,
    Unauthenticated,
    Authenticated(AuthUser),
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn identity(&self) -> Option<AuthIdentity> {
        self.user().map(AuthUser::identity)
    }
}

/// Auth-state change notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(AuthSession),
    TokenRefreshed(AuthSession),
    UserUpdated(AuthSession),
    SignedOut,
    PasswordRecovery,
}

/// Result of a registration. `session` is `None` when the service requires
/// e-mail confirmation before the first sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: AuthUser,
    pub session: Option<AuthSession>,
}
