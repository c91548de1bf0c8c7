use fintel_core::routes::Route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct SignInRequired {
    pub route: String,
    pub title: &'static str,
    pub message: &'static str,
    pub sign_in: &'static str,
}

#[must_use]
pub fn sign_in_required(route: &Route) -> SignInRequired {
    SignInRequired {
        route: route.to_path(),
        title: "Sign In Required",
        message: "Please sign in to view your collections",
        sign_in: "fintel auth login --email <email>",
    }
}

/// Print the sign-in prompt shown in place of an account-only page.
pub fn show_sign_in_required(route: &Route, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&sign_in_required(route), flags.format)
}
