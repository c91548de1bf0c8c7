use fintel_auth::{AuthBackend, SessionStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLogoutResponse {
    signed_out: bool,
}

/// The local session is cleared even when the server-side revoke fails.
pub async fn handle<B: AuthBackend>(
    store: &mut SessionStore<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Err(error) = store.sign_out().await {
        tracing::warn!(%error, "server-side sign out failed; local session cleared");
    }
    output(&AuthLogoutResponse { signed_out: true }, flags.format)
}
