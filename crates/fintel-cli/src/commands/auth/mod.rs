mod login;
mod logout;
mod register;
mod reset;
mod status;

use anyhow::Context;
use fintel_auth::{AuthBackend, SessionStore};
use fintel_config::FintelConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::build_session_store;

/// Handle `fintel auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &FintelConfig,
) -> anyhow::Result<()> {
    let Some(mut store) = build_session_store(config) else {
        if matches!(action, AuthCommands::Status) {
            return status::not_configured(flags);
        }
        config
            .require_auth()
            .context("set FINTEL_AUTH__URL and FINTEL_AUTH__ANON_KEY")?;
        anyhow::bail!("auth is not configured");
    };
    store.init().await;
    run(action, &mut store, flags).await
}

async fn run<B: AuthBackend>(
    action: &AuthCommands,
    store: &mut SessionStore<B>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Register(args) => register::handle(args, store, flags).await,
        AuthCommands::Login(args) => login::handle(args, store, flags).await,
        AuthCommands::Logout => logout::handle(store, flags).await,
        AuthCommands::Reset(args) => reset::handle(args, store, flags).await,
        AuthCommands::Status => status::handle(store, flags),
    }
}
