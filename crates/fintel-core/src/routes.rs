//! Navigable routes.
//!
//! ```text
//! /                      → Home
//! /browse[?search=term]  → Browse
//! /franchise/:id         → FranchiseDetail
//! /collections           → Collections (requires a session)
//! /login                 → Login
//! /register              → Register
//! ```

use std::fmt;

use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Browse { search: Option<String> },
    FranchiseDetail { id: String },
    Collections,
    Login,
    Register,
}

impl Route {
    /// Parse a path with an optional query string.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownRoute` if the path matches no route.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/" => Self::Home,
            "/browse" => Self::Browse {
                search: query_param(query, "search").filter(|s| !s.is_empty()),
            },
            "/collections" => Self::Collections,
            "/login" => Self::Login,
            "/register" => Self::Register,
            other => match other.strip_prefix("/franchise/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::FranchiseDetail {
                    id: decode(id),
                },
                _ => return Err(CoreError::UnknownRoute(raw.to_string())),
            },
        };
        Ok(route)
    }

    /// Routes that render nothing but a sign-in prompt without a session.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Collections)
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Browse { search: None } => "/browse".to_string(),
            Self::Browse {
                search: Some(term),
            } => format!("/browse?search={}", urlencoding::encode(term)),
            Self::FranchiseDetail { id } => format!("/franchise/{}", urlencoding::encode(id)),
            Self::Collections => "/collections".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| decode(&value.replace('+', " ")))
}

fn decode(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_string(), |s| s.into_owned())
}
