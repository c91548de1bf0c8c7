//! The seam between the session store and the hosted auth service.

use std::future::Future;

use crate::error::AuthError;
use crate::session::{AuthSession, AuthUser, SignUpOutcome};

/// Operations the session store needs from an auth service.
///
/// [`crate::gotrue::GoTrueClient`] is the production implementation. Errors
/// carry the service's own message unchanged.
pub trait AuthBackend: Send + Sync {
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<SignUpOutcome, AuthError>> + Send;

    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;

    /// Revoke the session server-side.
    fn sign_out(&self, access_token: &str) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Send a password-reset e-mail.
    fn recover(&self, email: &str) -> impl Future<Output = Result<(), AuthError>> + Send;

    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;

    fn get_user(&self, access_token: &str)
    -> impl Future<Output = Result<AuthUser, AuthError>> + Send;
}
