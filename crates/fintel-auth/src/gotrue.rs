//! REST client for a GoTrue-compatible auth service.
//!
//! ```text
//! POST /auth/v1/signup                          { email, password }
//! POST /auth/v1/token?grant_type=password       { email, password }
//! POST /auth/v1/token?grant_type=refresh_token  { refresh_token }
//! POST /auth/v1/logout                          Authorization: Bearer <access>
//! POST /auth/v1/recover                         { email }
//! GET  /auth/v1/user                            Authorization: Bearer <access>
//! ```
//!
//! Every request carries the `apikey` and `X-Client-Info` headers.

use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use fintel_config::AuthConfig;

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::jwt::decode_expiry;
use crate::session::{AuthSession, AuthUser, SignUpOutcome};

const CLIENT_INFO_HEADER: &str = "X-Client-Info";

#[derive(Debug, Clone)]
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    client_info: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self) -> Result<AuthSession, AuthError> {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => chrono::DateTime::from_timestamp(at, 0)
                .ok_or_else(|| AuthError::InvalidToken(format!("invalid expires_at: {at}")))?,
            (None, Some(secs)) => Utc::now() + chrono::Duration::seconds(secs),
            (None, None) => decode_expiry(&self.access_token)?,
        };
        Ok(AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        })
    }
}

impl GoTrueClient {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str, client_info: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client_info: client_info.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.base_url(), &config.anon_key, &config.client_info)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
            .header(CLIENT_INFO_HEADER, &self.client_info)
    }

    /// Send and return the JSON body, or the service's error message.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value, AuthError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "auth response");

        if !status.is_success() {
            return Err(AuthError::Backend(error_message(status, &body)));
        }
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| AuthError::Http(format!("unexpected response body: {e}")))
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<AuthSession, AuthError> {
        let value = self
            .send(
                self.request(reqwest::Method::POST, &format!("token?grant_type={grant_type}"))
                    .json(&body),
            )
            .await?;
        parse_token_response(value)?.into_session()
    }
}

fn parse_token_response(value: serde_json::Value) -> Result<TokenResponse, AuthError> {
    serde_json::from_value(value)
        .map_err(|e| AuthError::Http(format!("unexpected token response: {e}")))
}

/// First non-empty of `error_description`, `msg`, `message`, `error`.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
                .filter(|message| !message.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("auth service returned {status}"))
}

impl AuthBackend for GoTrueClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let value = self
            .send(
                self.request(reqwest::Method::POST, "signup")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        // A session comes back only when no e-mail confirmation is required;
        // otherwise the body is the bare user.
        if value.get("access_token").is_some() {
            let session = parse_token_response(value)?.into_session()?;
            return Ok(SignUpOutcome {
                user: session.user.clone(),
                session: Some(session),
            });
        }
        let user_value = value.get("user").cloned().unwrap_or(value);
        let user: AuthUser = serde_json::from_value(user_value)
            .map_err(|e| AuthError::Http(format!("unexpected signup response: {e}")))?;
        Ok(SignUpOutcome {
            user,
            session: None,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.send(
            self.request(reqwest::Method::POST, "logout")
                .bearer_auth(access_token),
        )
        .await?;
        Ok(())
    }

    async fn recover(&self, email: &str) -> Result<(), AuthError> {
        self.send(
            self.request(reqwest::Method::POST, "recover")
                .json(&json!({ "email": email })),
        )
        .await?;
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let value = self
            .send(
                self.request(reqwest::Method::GET, "user")
                    .bearer_auth(access_token),
            )
            .await?;
        serde_json::from_value(value)
            .map_err(|e| AuthError::Http(format!("unexpected user response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_message_prefers_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            error_message(reqwest::StatusCode::BAD_REQUEST, body),
            "Invalid login credentials"
        );
        assert_eq!(
            error_message(reqwest::StatusCode::UNPROCESSABLE_ENTITY, r#"{"msg":"User already registered"}"#),
            "User already registered"
        );
        assert_eq!(
            error_message(reqwest::StatusCode::BAD_GATEWAY, "<html>"),
            "auth service returned 502 Bad Gateway"
        );
    }

    #[test]
    fn token_response_expiry_sources() {
        let value = json!({
            "access_token": "a", "refresh_token": "r",
            "expires_at": 1_900_000_000, "expires_in": 3600,
            "user": { "id": "u1", "email": "u@example.com" }
        });
        let session = parse_token_response(value).unwrap().into_session().unwrap();
        assert_eq!(session.expires_at.timestamp(), 1_900_000_000);

        let jwt = crate::jwt::make_jwt_with_exp("u1", 1_800_000_000);
        let value = json!({ "access_token": jwt, "refresh_token": "r", "user": { "id": "u1" } });
        let session = parse_token_response(value).unwrap().into_session().unwrap();
        assert_eq!(session.expires_at.timestamp(), 1_800_000_000);
        assert_eq!(session.user.email, None);
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GoTrueClient::new("https://abc.supabase.co/", "anon", "franchise-intel-ai");
        assert_eq!(client.endpoint("signup"), "https://abc.supabase.co/auth/v1/signup");
    }
}
