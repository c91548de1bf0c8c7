use fintel_auth::{AuthBackend, SessionStore};
use fintel_core::validation::validate_sign_in;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::shared::prompt::value_or_prompt;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: Option<String>,
}

pub async fn handle<B: AuthBackend>(
    args: &AuthLoginArgs,
    store: &mut SessionStore<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = value_or_prompt(args.password.as_deref(), "Password")?;
    validate_sign_in(&args.email, &password)?;

    let user = store.sign_in(args.email.trim(), &password).await?;
    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id,
            email: user.email,
            expires_at: store.session().map(|s| s.expires_at.to_rfc3339()),
        },
        flags.format,
    )
}
