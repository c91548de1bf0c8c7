use clap::{Args, Subcommand};

/// Account and session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    Register(AuthRegisterArgs),
    /// Sign in with e-mail and password.
    Login(AuthLoginArgs),
    /// Sign out and clear the stored session.
    Logout,
    /// Send a password reset e-mail.
    Reset(AuthResetArgs),
    /// Show the current session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthResetArgs {
    #[arg(long)]
    pub email: String,
}
