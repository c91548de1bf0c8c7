//! # fintel-auth
//!
//! Authentication for Franchise Intel.
//!
//! Provides a REST client for a GoTrue-compatible auth service
//! ([`gotrue::GoTrueClient`]), session persistence (OS keyring with a `0600`
//! file fallback and an env override for CI), and the [`store::SessionStore`]
//! that owns session state and broadcasts it over a `watch` channel.

pub mod backend;
pub mod error;
pub mod gotrue;
pub mod jwt;
pub mod session;
pub mod store;
pub mod token_store;

pub use backend::AuthBackend;
pub use error::AuthError;
pub use gotrue::GoTrueClient;
pub use session::{AuthEvent, AuthSession, AuthUser, SessionState, SignUpOutcome};
pub use store::SessionStore;
pub use token_store::TokenStore;
