use fintel_auth::{AuthBackend, SessionState, SessionStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Default, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

pub fn handle<B: AuthBackend>(store: &SessionStore<B>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&describe(store), flags.format)
}

pub fn not_configured(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &AuthStatusResponse {
            note: Some("FINTEL_AUTH__URL and FINTEL_AUTH__ANON_KEY are not configured".into()),
            ..AuthStatusResponse::default()
        },
        flags.format,
    )
}

fn describe<B: AuthBackend>(store: &SessionStore<B>) -> AuthStatusResponse {
    match store.state() {
        SessionState::Authenticated(user) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(user.id),
            email: user.email,
            expires_at: store.session().map(|s| s.expires_at.to_rfc3339()),
            token_source: store.token_store().source().map(|s| s.as_str()),
            note: None,
        },
        SessionState::Unauthenticated => AuthStatusResponse {
            note: Some("no session; run `fintel auth login`".into()),
            ..AuthStatusResponse::default()
        },
        SessionState::Loading => AuthStatusResponse {
            note: Some("session not recovered yet".into()),
            ..AuthStatusResponse::default()
        },
    }
}
