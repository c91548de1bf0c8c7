use fintel_auth::{AuthBackend, SessionStore};
use fintel_core::errors::CoreError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthResetArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthResetResponse {
    email: String,
    sent: bool,
}

pub async fn handle<B: AuthBackend>(
    args: &AuthResetArgs,
    store: &SessionStore<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = args.email.trim();
    if email.is_empty() {
        return Err(CoreError::validation("Email is required").into());
    }
    store.reset_password(email).await?;
    output(
        &AuthResetResponse {
            email: email.to_string(),
            sent: true,
        },
        flags.format,
    )
}
