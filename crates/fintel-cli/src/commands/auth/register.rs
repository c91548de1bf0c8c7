use fintel_auth::{AuthBackend, SessionStore};
use fintel_core::validation::validate_registration;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::shared::prompt::value_or_prompt;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    user_id: String,
    email: Option<String>,
    signed_in: bool,
    message: &'static str,
}

const CONFIRM_EMAIL: &str = "Account created! Please check your email to verify your account.";
const SIGNED_IN: &str = "Account created and signed in.";

pub async fn handle<B: AuthBackend>(
    args: &AuthRegisterArgs,
    store: &mut SessionStore<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = value_or_prompt(args.password.as_deref(), "Password")?;
    let confirm = value_or_prompt(args.confirm_password.as_deref(), "Confirm password")?;
    validate_registration(&args.email, &password, &confirm)?;

    let outcome = store.sign_up(args.email.trim(), &password).await?;
    let signed_in = outcome.session.is_some();
    output(
        &AuthRegisterResponse {
            registered: true,
            user_id: outcome.user.id,
            email: outcome.user.email,
            signed_in,
            message: if signed_in { SIGNED_IN } else { CONFIRM_EMAIL },
        },
        flags.format,
    )
}
