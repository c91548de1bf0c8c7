use fintel_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in: run `fintel auth login`")]
    NotAuthenticated,

    /// Message returned by the auth service, verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("auth request failed: {0}")]
    Http(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        Self::Validation(error.to_string())
    }
}
